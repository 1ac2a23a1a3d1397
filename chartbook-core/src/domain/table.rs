//! ObservationTable — an ordered, immutable-after-load sequence of records.

use serde::{Deserialize, Serialize};

use super::{KeyKind, ObsKey, Observation};

/// An ordered sequence of observations with a name.
///
/// Built once at load time. Transforms never mutate a table in place; they
/// return a new one, so re-running a pipeline on identical input yields
/// identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationTable {
    name: String,
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(name: impl Into<String>, rows: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    /// Key kind of the first row, if any. Ingest guarantees homogeneity.
    pub fn key_kind(&self) -> Option<KeyKind> {
        self.rows.first().map(|r| r.key.kind())
    }

    /// Distinct group labels in first-seen order.
    pub fn groups(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.group) {
                seen.push(row.group.clone());
            }
        }
        seen
    }

    /// Distinct keys in first-seen order (categorical/time axis ticks).
    pub fn distinct_keys(&self) -> Vec<ObsKey> {
        let mut seen: Vec<ObsKey> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.key) {
                seen.push(row.key.clone());
            }
        }
        seen
    }

    /// Rows belonging to one group, preserving order.
    pub fn group_rows(&self, group: &str) -> Vec<&Observation> {
        self.rows.iter().filter(|r| r.group == group).collect()
    }

    /// (min, max) over all values. None for an empty table.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rows.iter().fold(None, |acc, r| match acc {
            None => Some((r.value, r.value)),
            Some((lo, hi)) => Some((lo.min(r.value), hi.max(r.value))),
        })
    }

    /// (min, max) over numeric keys. None if the table has no numeric keys.
    pub fn key_range(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.key.as_numeric())
            .fold(None, |acc, k| match acc {
                None => Some((k, k)),
                Some((lo, hi)) => Some((lo.min(k), hi.max(k))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ObservationTable {
        ObservationTable::new(
            "sample",
            vec![
                Observation::new(ObsKey::Category("a".into()), 1.0, "g1"),
                Observation::new(ObsKey::Category("b".into()), 3.0, "g1"),
                Observation::new(ObsKey::Category("a".into()), 2.0, "g2"),
            ],
        )
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        assert_eq!(sample_table().groups(), vec!["g1", "g2"]);
    }

    #[test]
    fn distinct_keys_deduplicate() {
        let keys = sample_table().distinct_keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].label(), "a");
        assert_eq!(keys[1].label(), "b");
    }

    #[test]
    fn value_range_spans_all_rows() {
        assert_eq!(sample_table().value_range(), Some((1.0, 3.0)));
        assert_eq!(ObservationTable::new("empty", vec![]).value_range(), None);
    }

    #[test]
    fn key_range_is_none_for_categorical_keys() {
        assert_eq!(sample_table().key_range(), None);

        let numeric = ObservationTable::new(
            "n",
            vec![
                Observation::new(ObsKey::Numeric(0.2), 1.0, ""),
                Observation::new(ObsKey::Numeric(0.9), 1.0, ""),
            ],
        );
        assert_eq!(numeric.key_range(), Some((0.2, 0.9)));
    }

    #[test]
    fn group_rows_filters_and_preserves_order() {
        let table = sample_table();
        let g1 = table.group_rows("g1");
        assert_eq!(g1.len(), 2);
        assert_eq!(g1[0].value, 1.0);
        assert_eq!(g1[1].value, 3.0);
    }
}
