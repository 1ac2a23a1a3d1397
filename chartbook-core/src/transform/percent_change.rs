//! Percent change relative to a per-group baseline row.

use crate::domain::{ObsKey, ObservationTable, Observation};

use super::TransformError;

/// Result of the percent-change transform.
///
/// Groups whose baseline value is exactly zero cannot be indexed; they are
/// flagged in `undefined_groups` and omitted from the derived table rather
/// than silently producing non-finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentChange {
    pub table: ObservationTable,
    pub undefined_groups: Vec<String>,
}

/// Derive `100 * (value - baseline) / baseline` for every row, where the
/// baseline is the group's row at `baseline_key`.
///
/// A group without a baseline row is a configuration error. Row order and
/// group order are preserved from the input.
pub fn percent_change(
    table: &ObservationTable,
    baseline_key: &ObsKey,
) -> Result<PercentChange, TransformError> {
    if table.is_empty() {
        return Err(TransformError::EmptyTable);
    }

    let mut rows = Vec::with_capacity(table.len());
    let mut undefined_groups = Vec::new();

    for group in table.groups() {
        let group_rows = table.group_rows(&group);
        let baseline = group_rows
            .iter()
            .find(|r| r.key == *baseline_key)
            .map(|r| r.value)
            .ok_or_else(|| TransformError::MissingBaseline {
                group: group.clone(),
                key: baseline_key.clone(),
            })?;

        if baseline == 0.0 {
            undefined_groups.push(group);
            continue;
        }

        for row in group_rows {
            rows.push(Observation::new(
                row.key.clone(),
                100.0 * (row.value - baseline) / baseline,
                group.clone(),
            ));
        }
    }

    Ok(PercentChange {
        table: ObservationTable::new(format!("{}_pct", table.name()), rows),
        undefined_groups,
    })
}
