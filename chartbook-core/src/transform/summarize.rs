//! Per-group summaries, sorted by the computed key.

use serde::{Deserialize, Serialize};

use crate::domain::{ObsKey, Observation, ObservationTable};

use super::TransformError;

/// Aggregate of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group: String,
    pub count: usize,
    pub mean: f64,
    /// This group's share of the summed values, in percent.
    pub share_pct: f64,
}

/// Which aggregate a summary table plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStat {
    Mean,
    SharePct,
}

/// Summarize a table per group, sorted ascending by mean.
///
/// Sorting by the computed key means the output sequence of means is
/// non-decreasing, which is what an ordered column chart wants.
pub fn summarize_groups(table: &ObservationTable) -> Result<Vec<GroupSummary>, TransformError> {
    if table.is_empty() {
        return Err(TransformError::EmptyTable);
    }

    let total: f64 = table.iter().map(|r| r.value).sum();

    let mut summaries: Vec<GroupSummary> = table
        .groups()
        .into_iter()
        .map(|group| {
            let rows = table.group_rows(&group);
            let sum: f64 = rows.iter().map(|r| r.value).sum();
            let count = rows.len();
            GroupSummary {
                group,
                count,
                mean: sum / count as f64,
                share_pct: if total == 0.0 { 0.0 } else { 100.0 * sum / total },
            }
        })
        .collect();

    // total_cmp keeps the sort total even if a non-finite value slipped
    // into a hand-built table; NaN means sort last.
    summaries.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    Ok(summaries)
}

/// Build a categorical table from group summaries, one row per group,
/// keyed by group name in sorted order. Suitable for a column chart.
pub fn summary_table(
    table: &ObservationTable,
    stat: SummaryStat,
) -> Result<ObservationTable, TransformError> {
    let summaries = summarize_groups(table)?;
    let rows = summaries
        .into_iter()
        .map(|s| {
            let value = match stat {
                SummaryStat::Mean => s.mean,
                SummaryStat::SharePct => s.share_pct,
            };
            Observation::new(ObsKey::Category(s.group.clone()), value, s.group)
        })
        .collect();

    Ok(ObservationTable::new(
        format!("{}_summary", table.name()),
        rows,
    ))
}
