//! Decoration policy: background grids, axis lines, legend.
//!
//! This is the knob the chapter is actually about. The presets form a
//! small closed set; each figure picks one to show what it does to the
//! reader's eye.

use serde::{Deserialize, Serialize};

/// Which grid lines to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPreset {
    /// No background grid at all.
    None,
    /// Grid lines along both axes.
    Full,
    /// Horizontal lines only (the usual choice for time series).
    HorizontalOnly,
    /// Vertical lines only.
    VerticalOnly,
    /// No grid; a single dashed y = x reference line instead.
    DiagonalReference,
}

impl GridPreset {
    pub fn horizontal_lines(&self) -> bool {
        matches!(self, GridPreset::Full | GridPreset::HorizontalOnly)
    }

    pub fn vertical_lines(&self) -> bool {
        matches!(self, GridPreset::Full | GridPreset::VerticalOnly)
    }
}

/// How many grid lines. `Dense` is the chapter's "too much of a good
/// thing" example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridDensity {
    Normal,
    Dense,
}

/// The full decoration configuration of one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    pub grid: GridPreset,
    pub density: GridDensity,
    pub axis_lines: bool,
    pub legend: bool,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            grid: GridPreset::Full,
            density: GridDensity::Normal,
            axis_lines: false,
            legend: true,
        }
    }
}

impl Decoration {
    /// Horizontal grid lines only, no axis frame — the minimal look.
    pub fn minimal_horizontal() -> Self {
        Self {
            grid: GridPreset::HorizontalOnly,
            ..Self::default()
        }
    }

    /// No grid, visible axis lines.
    pub fn bare_axes() -> Self {
        Self {
            grid: GridPreset::None,
            axis_lines: true,
            ..Self::default()
        }
    }

    /// Dashed y = x reference line, no grid.
    pub fn diagonal_reference() -> Self {
        Self {
            grid: GridPreset::DiagonalReference,
            axis_lines: true,
            ..Self::default()
        }
    }

    pub fn with_density(mut self, density: GridDensity) -> Self {
        self.density = density;
        self
    }

    pub fn with_axis_lines(mut self) -> Self {
        self.axis_lines = true;
        self
    }

    pub fn without_legend(mut self) -> Self {
        self.legend = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_grid_draws_both_directions() {
        assert!(GridPreset::Full.horizontal_lines());
        assert!(GridPreset::Full.vertical_lines());
    }

    #[test]
    fn horizontal_only_suppresses_vertical_lines() {
        assert!(GridPreset::HorizontalOnly.horizontal_lines());
        assert!(!GridPreset::HorizontalOnly.vertical_lines());
    }

    #[test]
    fn diagonal_reference_draws_no_grid_lines() {
        assert!(!GridPreset::DiagonalReference.horizontal_lines());
        assert!(!GridPreset::DiagonalReference.vertical_lines());
    }

    #[test]
    fn default_decoration_is_full_grid_with_legend() {
        let d = Decoration::default();
        assert_eq!(d.grid, GridPreset::Full);
        assert_eq!(d.density, GridDensity::Normal);
        assert!(!d.axis_lines);
        assert!(d.legend);
    }
}
