//! The chart specification value object.

use serde::{Deserialize, Serialize};

use crate::domain::ObservationTable;

use super::{
    AxisKind, ChannelMapping, Decoration, GeomKind, ScalePair, SpecError, Theme,
};

/// Everything the renderer needs for one figure.
///
/// Immutable once constructed; consumed exactly once. `validate()` catches
/// figure-definition mistakes (bad mappings, scale/key mismatches,
/// decoration presets that need a scale kind the table cannot provide)
/// before any rendering happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub table: ObservationTable,
    pub mapping: ChannelMapping,
    pub geom: GeomKind,
    pub scales: ScalePair,
    pub decor: Decoration,
    pub theme: Theme,
}

impl ChartSpec {
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.table.is_empty() {
            return Err(SpecError::EmptyTable);
        }

        self.mapping.validate()?;

        // Ingest guarantees homogeneous keys, so the first row decides.
        let key_kind = self.table.key_kind().ok_or(SpecError::EmptyTable)?;
        if !self.scales.x.kind.accepts(key_kind) {
            return Err(SpecError::ScaleKeyMismatch {
                scale: self.scales.x.kind,
                key: key_kind,
            });
        }

        if self.geom == GeomKind::Column && self.scales.x.kind != AxisKind::Categorical {
            return Err(SpecError::ColumnNeedsCategoricalScale);
        }

        if self.decor.grid == super::GridPreset::DiagonalReference
            && (self.scales.x.kind != AxisKind::Linear || self.scales.y.kind != AxisKind::Linear)
        {
            return Err(SpecError::DiagonalNeedsLinearScales);
        }

        Ok(())
    }

    /// Deterministic blake3 fingerprint over the serialized spec.
    ///
    /// Two identical specs fingerprint identically, so a render manifest
    /// can tell whether a figure changed between runs.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("ChartSpec serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ObsKey, Observation};
    use crate::spec::{AxisScale, GridPreset};

    fn numeric_table() -> ObservationTable {
        ObservationTable::new(
            "pairs",
            vec![
                Observation::new(ObsKey::Numeric(0.1), 0.2, ""),
                Observation::new(ObsKey::Numeric(0.8), 0.7, ""),
            ],
        )
    }

    fn scatter_spec() -> ChartSpec {
        ChartSpec {
            title: "pairs".into(),
            table: numeric_table(),
            mapping: ChannelMapping::xy(),
            geom: GeomKind::Point,
            scales: ScalePair {
                x: AxisScale::linear(),
                y: AxisScale::linear(),
            },
            decor: Decoration::default(),
            theme: Theme::White,
        }
    }

    #[test]
    fn valid_scatter_spec_passes() {
        assert!(scatter_spec().validate().is_ok());
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut spec = scatter_spec();
        spec.table = ObservationTable::new("empty", vec![]);
        assert!(matches!(spec.validate(), Err(SpecError::EmptyTable)));
    }

    #[test]
    fn scale_must_match_key_kind() {
        let mut spec = scatter_spec();
        spec.scales.x = AxisScale::time();
        assert!(matches!(
            spec.validate(),
            Err(SpecError::ScaleKeyMismatch { .. })
        ));
    }

    #[test]
    fn column_geometry_needs_categorical_x() {
        let mut spec = scatter_spec();
        spec.geom = GeomKind::Column;
        assert!(matches!(
            spec.validate(),
            Err(SpecError::ColumnNeedsCategoricalScale)
        ));
    }

    #[test]
    fn diagonal_reference_needs_linear_scales() {
        let mut spec = scatter_spec();
        spec.decor.grid = GridPreset::DiagonalReference;
        assert!(spec.validate().is_ok());

        spec.scales.y = AxisScale::categorical();
        assert!(matches!(
            spec.validate(),
            Err(SpecError::DiagonalNeedsLinearScales)
        ));
    }

    #[test]
    fn fingerprint_is_deterministic_and_sensitive() {
        let spec = scatter_spec();
        assert_eq!(spec.fingerprint(), spec.fingerprint());

        let mut changed = spec.clone();
        changed.decor.grid = GridPreset::HorizontalOnly;
        assert_ne!(spec.fingerprint(), changed.fingerprint());
    }
}
