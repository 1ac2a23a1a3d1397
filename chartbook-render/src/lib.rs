//! Chartbook Render — turns chart specifications into images.
//!
//! The charting engine itself is external and unmodified (`charming`);
//! this crate only translates a [`chartbook_core::spec::ChartSpec`] into
//! the engine's builder calls, hosts the chapter's figure catalog, and
//! writes the per-run artifacts (figure files plus `manifest.json`).

pub mod artifacts;
pub mod config;
mod decor;
pub mod figures;
pub mod renderer;

pub use artifacts::{load_manifest, render_figures, RenderManifest, RenderOptions, RenderSummary};
pub use config::{ConfigError, OutputFormat, RenderConfig};
pub use figures::{catalog, find_figure, Datasets, Figure, FigureError};
pub use renderer::{render_html, render_svg, to_chart, RenderError};
