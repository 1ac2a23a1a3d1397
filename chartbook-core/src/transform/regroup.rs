//! Categorical regrouping via a lookup table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Observation, ObservationTable};

use super::TransformError;

/// Maps fine-grained group labels onto coarser ones, e.g. "track (400m)"
/// and "track (sprint)" both onto "track".
///
/// By default an unmapped label is an error; `with_passthrough` keeps
/// unmapped labels unchanged instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regrouper {
    map: BTreeMap<String, String>,
    passthrough: bool,
}

impl Regrouper {
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
            passthrough: false,
        }
    }

    /// Keep unmapped labels unchanged instead of failing on them.
    pub fn with_passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    /// Whether `label` has a mapping (or would pass through).
    pub fn maps(&self, label: &str) -> bool {
        self.passthrough || self.map.contains_key(label)
    }

    /// Resolve a single label.
    pub fn resolve(&self, label: &str) -> Result<String, TransformError> {
        match self.map.get(label) {
            Some(target) => Ok(target.clone()),
            None if self.passthrough => Ok(label.to_string()),
            None => Err(TransformError::UnknownGroup(label.to_string())),
        }
    }

    /// Apply the lookup to every row, producing a new table.
    pub fn apply(&self, table: &ObservationTable) -> Result<ObservationTable, TransformError> {
        let rows = table
            .iter()
            .map(|row| {
                Ok(Observation::new(
                    row.key.clone(),
                    row.value,
                    self.resolve(&row.group)?,
                ))
            })
            .collect::<Result<Vec<_>, TransformError>>()?;

        Ok(ObservationTable::new(
            format!("{}_regrouped", table.name()),
            rows,
        ))
    }
}
