//! Pure row-wise transforms over observation tables.
//!
//! Every function here returns a new table (or summary) and leaves its
//! input untouched; running a transform twice on the same input yields
//! the same output.

mod percent_change;
mod regroup;
mod summarize;

pub use percent_change::{percent_change, PercentChange};
pub use regroup::Regrouper;
pub use summarize::{summarize_groups, summary_table, GroupSummary, SummaryStat};

use crate::domain::ObsKey;

/// Errors from the transform stage.
///
/// An absent baseline row is a configuration error, not a runtime fault to
/// recover from; the same goes for a group label the lookup table does not
/// know about.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("group '{group}' has no baseline row at key {key:?}")]
    MissingBaseline { group: String, key: ObsKey },

    #[error("unknown group label '{0}' (not in the lookup table)")]
    UnknownGroup(String),

    #[error("transform requires a non-empty table")]
    EmptyTable,
}
