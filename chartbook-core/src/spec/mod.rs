//! Declarative chart specifications.
//!
//! A [`ChartSpec`] is a value object: data table, channel mapping, geometry,
//! scales, decoration, theme. It is immutable once constructed and consumed
//! exactly once by the renderer. Nothing here draws anything; the renderer
//! crate translates specs into calls on the external charting library.

mod chart;
mod decor;
mod geometry;
mod mapping;
mod scale;
mod theme;

pub use chart::ChartSpec;
pub use decor::{Decoration, GridDensity, GridPreset};
pub use geometry::GeomKind;
pub use mapping::{Channel, ChannelMapping};
pub use scale::{AxisKind, AxisScale, ScalePair};
pub use theme::Theme;

use crate::domain::KeyKind;

/// Errors from spec validation.
///
/// These are figure-definition bugs, caught before the renderer runs.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("channel '{channel}' cannot map to the {column:?} column")]
    InvalidMapping {
        channel: &'static str,
        column: Channel,
    },

    #[error("x scale kind {scale:?} does not match table key kind {key:?}")]
    ScaleKeyMismatch { scale: AxisKind, key: KeyKind },

    #[error("diagonal reference line requires linear x and y scales")]
    DiagonalNeedsLinearScales,

    #[error("column geometry requires a categorical x scale")]
    ColumnNeedsCategoricalScale,

    #[error("chart specification has an empty data table")]
    EmptyTable,
}
