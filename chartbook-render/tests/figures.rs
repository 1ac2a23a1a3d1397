//! End-to-end checks over the full figure catalog.

use std::collections::HashSet;

use chartbook_render::figures::{catalog, Datasets};
use chartbook_render::{load_manifest, render_figures, to_chart, OutputFormat, RenderOptions};

#[test]
fn every_catalog_figure_builds_a_valid_spec() {
    let datasets = Datasets::sample();
    for figure in catalog() {
        let spec = (figure.build)(&datasets)
            .unwrap_or_else(|e| panic!("figure '{}' failed to build: {e}", figure.id));
        spec.validate()
            .unwrap_or_else(|e| panic!("figure '{}' built an invalid spec: {e}", figure.id));
    }
}

#[test]
fn every_catalog_figure_translates_to_a_chart() {
    let datasets = Datasets::sample();
    for figure in catalog() {
        let spec = (figure.build)(&datasets).unwrap();
        to_chart(&spec).unwrap_or_else(|e| panic!("figure '{}' failed to render: {e}", figure.id));
    }
}

#[test]
fn catalog_fingerprints_are_distinct() {
    let datasets = Datasets::sample();
    let fingerprints: HashSet<String> = catalog()
        .iter()
        .map(|f| (f.build)(&datasets).unwrap().fingerprint())
        .collect();
    assert_eq!(fingerprints.len(), catalog().len());
}

#[test]
fn full_html_run_produces_one_file_per_figure() {
    let dir = tempfile::tempdir().unwrap();
    let options = RenderOptions {
        format: OutputFormat::Html,
        ..RenderOptions::default()
    };

    let summary = render_figures(catalog(), &Datasets::sample(), &options, dir.path()).unwrap();
    assert!(summary.all_ok(), "failures: {:?}", summary.failures);
    assert_eq!(summary.written.len(), catalog().len());

    let manifest = load_manifest(dir.path()).unwrap();
    assert_eq!(manifest.figures.len(), catalog().len());
    for record in &manifest.figures {
        let file = dir.path().join(&record.file);
        let html = std::fs::read_to_string(&file).unwrap();
        assert!(!html.is_empty());
    }
}

#[test]
fn datasets_round_trip_through_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    chartbook_core::data::sample::write_sample_csvs(dir.path()).unwrap();

    let from_files = Datasets::from_dir(dir.path()).unwrap();
    let sample = Datasets::sample();
    assert_eq!(from_files.stocks.len(), sample.stocks.len());
    assert_eq!(from_files.athletes.groups(), sample.athletes.groups());
    assert_eq!(from_files.proteins.len(), sample.proteins.len());
}
