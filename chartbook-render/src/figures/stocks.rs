//! Stock price figures: the same indexed time series under six
//! different grid treatments.

use chartbook_core::domain::{KeyKind, ObsKey, ObservationTable};
use chartbook_core::spec::{
    AxisScale, ChannelMapping, ChartSpec, Decoration, GeomKind, GridDensity, ScalePair, Theme,
};
use chartbook_core::transform::percent_change;

use super::{Datasets, FigureError};

/// Percent change per ticker relative to the first month in the table.
fn indexed_prices(stocks: &ObservationTable) -> Result<ObservationTable, FigureError> {
    let baseline = earliest_key(stocks);
    Ok(percent_change(stocks, &baseline)?.table)
}

/// Earliest date in the table, or the first key as-is when the keys are
/// not dates. Loader output is sorted per group, but a hand-edited CSV
/// need not be, so scan rather than trust row order.
fn earliest_key(table: &ObservationTable) -> ObsKey {
    if table.key_kind() == Some(KeyKind::Date) {
        table
            .iter()
            .map(|r| r.key.clone())
            .min_by_key(|k| match k {
                ObsKey::Date(d) => *d,
                _ => chrono::NaiveDate::MAX,
            })
            .unwrap_or(ObsKey::Category(String::new()))
    } else {
        table
            .iter()
            .next()
            .map(|r| r.key.clone())
            .unwrap_or(ObsKey::Category(String::new()))
    }
}

fn base_spec(datasets: &Datasets, title: &str) -> Result<ChartSpec, FigureError> {
    Ok(ChartSpec {
        title: title.to_string(),
        table: indexed_prices(&datasets.stocks)?,
        mapping: ChannelMapping::xy_colored(),
        geom: GeomKind::Line,
        scales: ScalePair {
            x: AxisScale::time(),
            y: AxisScale::linear().with_label("price change (%)"),
        },
        decor: Decoration::default(),
        theme: Theme::White,
    })
}

pub(super) fn gray_grid(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let mut spec = base_spec(datasets, "Stock price over time")?;
    spec.theme = Theme::Gray;
    Ok(spec)
}

pub(super) fn dense_grid(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let mut spec = gray_grid(datasets)?;
    spec.decor = Decoration::default().with_density(GridDensity::Dense);
    Ok(spec)
}

pub(super) fn white_grid(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    base_spec(datasets, "Stock price over time")
}

pub(super) fn horizontal_grid(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let mut spec = base_spec(datasets, "Stock price over time")?;
    spec.decor = Decoration::minimal_horizontal();
    Ok(spec)
}

pub(super) fn horizontal_grid_with_axes(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let mut spec = horizontal_grid(datasets)?;
    spec.decor = Decoration::minimal_horizontal().with_axis_lines();
    Ok(spec)
}

pub(super) fn no_grid(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let mut spec = base_spec(datasets, "Stock price over time")?;
    spec.decor = Decoration::bare_axes();
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartbook_core::data::sample;
    use chartbook_core::spec::GridPreset;

    #[test]
    fn indexed_series_start_at_zero() {
        let datasets = Datasets::sample();
        let spec = white_grid(&datasets).unwrap();
        let baseline = ObsKey::Date(sample::stock_baseline_date());
        for ticker in sample::STOCK_TICKERS {
            let first = spec
                .table
                .group_rows(ticker)
                .iter()
                .find(|r| r.key == baseline)
                .map(|r| r.value)
                .unwrap();
            assert_eq!(first, 0.0);
        }
    }

    #[test]
    fn grid_treatments_differ_only_in_decoration_and_theme() {
        let datasets = Datasets::sample();
        let gray = gray_grid(&datasets).unwrap();
        let bare = no_grid(&datasets).unwrap();
        assert_eq!(gray.table, bare.table);
        assert_eq!(bare.decor.grid, GridPreset::None);
        assert!(bare.decor.axis_lines);
        assert_eq!(gray.theme, Theme::Gray);
    }

    #[test]
    fn dense_variant_keeps_the_full_grid() {
        let spec = dense_grid(&Datasets::sample()).unwrap();
        assert_eq!(spec.decor.grid, GridPreset::Full);
        assert_eq!(spec.decor.density, GridDensity::Dense);
    }
}
