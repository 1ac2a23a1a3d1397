//! Axis scale configuration.

use serde::{Deserialize, Serialize};

use crate::domain::KeyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Categorical,
    Linear,
    Time,
}

impl AxisKind {
    /// Whether this scale can sit on an axis fed by the given key kind.
    pub fn accepts(&self, key: KeyKind) -> bool {
        matches!(
            (self, key),
            (AxisKind::Time, KeyKind::Date)
                | (AxisKind::Categorical, KeyKind::Category)
                | (AxisKind::Categorical, KeyKind::Date)
                | (AxisKind::Linear, KeyKind::Numeric)
        )
    }
}

/// One axis: kind, label, optional fixed domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub kind: AxisKind,
    pub label: Option<String>,
    pub domain: Option<(f64, f64)>,
}

impl AxisScale {
    pub fn categorical() -> Self {
        Self {
            kind: AxisKind::Categorical,
            label: None,
            domain: None,
        }
    }

    pub fn linear() -> Self {
        Self {
            kind: AxisKind::Linear,
            label: None,
            domain: None,
        }
    }

    pub fn time() -> Self {
        Self {
            kind: AxisKind::Time,
            label: None,
            domain: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }
}

/// Scales for both position axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub x: AxisScale,
    pub y: AxisScale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_accepts_dates_only() {
        assert!(AxisKind::Time.accepts(KeyKind::Date));
        assert!(!AxisKind::Time.accepts(KeyKind::Numeric));
    }

    #[test]
    fn categorical_scale_accepts_dates_as_labels() {
        // Monthly time series are commonly plotted on a category axis.
        assert!(AxisKind::Categorical.accepts(KeyKind::Date));
        assert!(AxisKind::Categorical.accepts(KeyKind::Category));
        assert!(!AxisKind::Categorical.accepts(KeyKind::Numeric));
    }

    #[test]
    fn builder_sets_label_and_domain() {
        let scale = AxisScale::linear()
            .with_label("observed correlation")
            .with_domain(0.0, 1.0);
        assert_eq!(scale.label.as_deref(), Some("observed correlation"));
        assert_eq!(scale.domain, Some((0.0, 1.0)));
    }
}
