//! Geometric representation of a chart.

use serde::{Deserialize, Serialize};

/// The closed set of geometries the chapter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeomKind {
    Line,
    Point,
    Column,
}
