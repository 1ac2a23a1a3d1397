//! The chapter's figure catalog.
//!
//! Each figure is a named builder from the shared datasets to a chart
//! specification. The catalog is a fixed ordered list so a full render run
//! always produces the same figures in the same order.

mod athletes;
mod proteins;
mod stocks;

use std::path::Path;

use chartbook_core::data::{read_csv, sample, IngestError};
use chartbook_core::domain::ObservationTable;
use chartbook_core::spec::{ChartSpec, SpecError};
use chartbook_core::transform::TransformError;

/// Errors from building a figure's specification.
#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

/// The three datasets every figure draws from.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub stocks: ObservationTable,
    pub athletes: ObservationTable,
    pub proteins: ObservationTable,
}

impl Datasets {
    /// The built-in deterministic sample data.
    pub fn sample() -> Self {
        Self {
            stocks: sample::stock_prices(),
            athletes: sample::athletes(),
            proteins: sample::proteins(),
        }
    }

    /// Load `stocks.csv`, `athletes.csv`, and `proteins.csv` from a
    /// directory, validated against the standard schemas.
    pub fn from_dir(dir: &Path) -> Result<Self, IngestError> {
        Ok(Self {
            stocks: read_csv(&dir.join("stocks.csv"), &sample::stock_schema())?,
            athletes: read_csv(&dir.join("athletes.csv"), &sample::athlete_schema())?,
            proteins: read_csv(&dir.join("proteins.csv"), &sample::protein_schema())?,
        })
    }
}

/// One catalog entry: a stable id, a display title, and the spec builder.
#[derive(Clone, Copy)]
pub struct Figure {
    pub id: &'static str,
    pub title: &'static str,
    pub build: fn(&Datasets) -> Result<ChartSpec, FigureError>,
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}

static CATALOG: [Figure; 10] = [
    Figure {
        id: "stocks-gray-grid",
        title: "Stock price over time, gray theme",
        build: stocks::gray_grid,
    },
    Figure {
        id: "stocks-dense-grid",
        title: "Stock price over time, dense grid",
        build: stocks::dense_grid,
    },
    Figure {
        id: "stocks-white-grid",
        title: "Stock price over time, white background",
        build: stocks::white_grid,
    },
    Figure {
        id: "stocks-hgrid",
        title: "Stock price over time, horizontal grid only",
        build: stocks::horizontal_grid,
    },
    Figure {
        id: "stocks-hgrid-axes",
        title: "Stock price over time, horizontal grid and axis lines",
        build: stocks::horizontal_grid_with_axes,
    },
    Figure {
        id: "stocks-no-grid",
        title: "Stock price over time, no grid",
        build: stocks::no_grid,
    },
    Figure {
        id: "athletes-scatter",
        title: "Athlete height vs weight by sport",
        build: athletes::scatter,
    },
    Figure {
        id: "athletes-columns",
        title: "Mean athlete weight by sport",
        build: athletes::columns,
    },
    Figure {
        id: "proteins-diagonal",
        title: "Predicted vs observed correlation, diagonal reference",
        build: proteins::diagonal,
    },
    Figure {
        id: "proteins-full-grid",
        title: "Predicted vs observed correlation, full grid",
        build: proteins::full_grid,
    },
];

/// All figures in render order.
pub fn catalog() -> &'static [Figure] {
    &CATALOG
}

/// Look up a single figure by its id.
pub fn find_figure(id: &str) -> Option<&'static Figure> {
    CATALOG.iter().find(|f| f.id == id)
}
