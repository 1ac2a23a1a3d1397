//! Rendering runs and their on-disk artifacts.
//!
//! A run renders a set of figures into an output directory and writes a
//! `manifest.json` recording what was produced. Figures are independent of
//! each other, so the set renders in parallel; one bad figure is reported
//! in the summary without aborting the rest.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use chartbook_core::spec::Theme;

use crate::config::OutputFormat;
use crate::figures::{Datasets, Figure};
use crate::renderer::{render_html, render_svg};

/// Settings for one render run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    /// When set, replaces every figure's own theme.
    pub theme_override: Option<Theme>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            format: OutputFormat::Svg,
            theme_override: None,
        }
    }
}

/// One successfully rendered figure, as recorded in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureRecord {
    pub id: String,
    pub title: String,
    /// Output file name, relative to the run directory.
    pub file: String,
    /// Fingerprint of the spec that produced the file.
    pub fingerprint: String,
}

/// The `manifest.json` written alongside the figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderManifest {
    pub generated_at: DateTime<Utc>,
    pub format: OutputFormat,
    pub figures: Vec<FigureRecord>,
}

/// Outcome of a render run.
#[derive(Debug)]
pub struct RenderSummary {
    pub written: Vec<FigureRecord>,
    /// Figure id paired with the error it failed with.
    pub failures: Vec<(String, String)>,
}

impl RenderSummary {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render `figures` against `datasets` into `out_dir` and write the
/// manifest. Returns the per-figure outcomes; IO and manifest problems
/// are the only hard errors.
pub fn render_figures(
    figures: &[Figure],
    datasets: &Datasets,
    options: &RenderOptions,
    out_dir: &Path,
) -> Result<RenderSummary> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output dir {}", out_dir.display()))?;

    let outcomes: Vec<std::result::Result<FigureRecord, (String, String)>> = figures
        .par_iter()
        .map(|figure| render_one(figure, datasets, options, out_dir))
        .collect();

    let mut written = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(record) => written.push(record),
            Err(failure) => failures.push(failure),
        }
    }

    write_manifest(out_dir, options.format, &written)?;

    Ok(RenderSummary { written, failures })
}

fn render_one(
    figure: &Figure,
    datasets: &Datasets,
    options: &RenderOptions,
    out_dir: &Path,
) -> std::result::Result<FigureRecord, (String, String)> {
    let fail = |e: String| (figure.id.to_string(), e);

    let mut spec = (figure.build)(datasets).map_err(|e| fail(e.to_string()))?;
    if let Some(theme) = options.theme_override {
        spec.theme = theme;
    }

    let rendered = match options.format {
        OutputFormat::Svg => render_svg(&spec, options.width, options.height),
        OutputFormat::Html => render_html(&spec, options.width, options.height),
    }
    .map_err(|e| fail(e.to_string()))?;

    let file = format!("{}.{}", figure.id, options.format.extension());
    std::fs::write(out_dir.join(&file), &rendered).map_err(|e| fail(e.to_string()))?;

    Ok(FigureRecord {
        id: figure.id.to_string(),
        title: figure.title.to_string(),
        file,
        fingerprint: spec.fingerprint(),
    })
}

fn write_manifest(out_dir: &Path, format: OutputFormat, written: &[FigureRecord]) -> Result<()> {
    let manifest = RenderManifest {
        generated_at: Utc::now(),
        format,
        figures: written.to_vec(),
    };
    let json = serde_json::to_string_pretty(&manifest)
        .context("failed to serialize render manifest")?;
    let path = out_dir.join("manifest.json");
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Load a run's manifest back from its directory.
pub fn load_manifest(dir: &Path) -> Result<RenderManifest> {
    let path = dir.join("manifest.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).context("failed to parse render manifest")
}
