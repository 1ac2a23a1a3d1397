//! Observation — the fundamental tabular data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key of an observation: the thing plotted on the x axis.
///
/// Dates come from time series (stock prices), categories from grouped data
/// (sports), and numeric keys from paired measurements (height vs weight,
/// predicted vs observed correlation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ObsKey {
    Date(NaiveDate),
    Category(String),
    Numeric(f64),
}

impl ObsKey {
    pub fn kind(&self) -> KeyKind {
        match self {
            ObsKey::Date(_) => KeyKind::Date,
            ObsKey::Category(_) => KeyKind::Category,
            ObsKey::Numeric(_) => KeyKind::Numeric,
        }
    }

    /// Display form used for categorical axis labels.
    pub fn label(&self) -> String {
        match self {
            ObsKey::Date(d) => d.to_string(),
            ObsKey::Category(c) => c.clone(),
            ObsKey::Numeric(n) => n.to_string(),
        }
    }

    /// Numeric value, if this key is numeric.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            ObsKey::Numeric(n) => Some(*n),
            _ => None,
        }
    }
}

/// The kind of key a table carries. Homogeneous within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    Date,
    Category,
    Numeric,
}

/// A single record: key, numeric measurement, group label.
///
/// Group labels are drawn from a small fixed set (a handful of tickers or
/// sports); tables without a grouping column use an empty label throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub key: ObsKey,
    pub value: f64,
    pub group: String,
}

impl Observation {
    pub fn new(key: ObsKey, value: f64, group: impl Into<String>) -> Self {
        Self {
            key,
            value,
            group: group.into(),
        }
    }

    /// Returns true if the measurement is finite (the table invariant).
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
            && match &self.key {
                ObsKey::Numeric(n) => n.is_finite(),
                _ => true,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_kind_matches_variant() {
        assert_eq!(
            ObsKey::Date(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap()).kind(),
            KeyKind::Date
        );
        assert_eq!(ObsKey::Category("track".into()).kind(), KeyKind::Category);
        assert_eq!(ObsKey::Numeric(1.5).kind(), KeyKind::Numeric);
    }

    #[test]
    fn finite_check_covers_key_and_value() {
        let ok = Observation::new(ObsKey::Numeric(1.0), 2.0, "a");
        assert!(ok.is_finite());

        let bad_value = Observation::new(ObsKey::Numeric(1.0), f64::NAN, "a");
        assert!(!bad_value.is_finite());

        let bad_key = Observation::new(ObsKey::Numeric(f64::INFINITY), 2.0, "a");
        assert!(!bad_key.is_finite());
    }

    #[test]
    fn observation_serialization_roundtrip() {
        let obs = Observation::new(
            ObsKey::Date(NaiveDate::from_ymd_opt(2012, 6, 1).unwrap()),
            101.5,
            "AAPL",
        );
        let json = serde_json::to_string(&obs).unwrap();
        let deser: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, deser);
    }
}
