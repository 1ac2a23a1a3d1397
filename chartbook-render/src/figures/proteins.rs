//! Protein correlation figures: the predicted-vs-observed scatter where
//! the meaningful reference is the y = x diagonal, not a grid.

use chartbook_core::spec::{
    AxisScale, ChannelMapping, ChartSpec, Decoration, GeomKind, ScalePair, Theme,
};

use super::{Datasets, FigureError};

fn base_spec(datasets: &Datasets) -> ChartSpec {
    ChartSpec {
        title: "Predicted vs observed correlation".to_string(),
        table: datasets.proteins.clone(),
        mapping: ChannelMapping::xy(),
        geom: GeomKind::Point,
        scales: ScalePair {
            x: AxisScale::linear()
                .with_label("predicted correlation")
                .with_domain(0.0, 1.0),
            y: AxisScale::linear()
                .with_label("observed correlation")
                .with_domain(0.0, 1.0),
        },
        decor: Decoration::diagonal_reference().without_legend(),
        theme: Theme::White,
    }
}

pub(super) fn diagonal(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    Ok(base_spec(datasets))
}

pub(super) fn full_grid(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let mut spec = base_spec(datasets);
    spec.decor = Decoration::default().without_legend();
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartbook_core::spec::GridPreset;

    #[test]
    fn diagonal_figure_pins_the_unit_square() {
        let spec = diagonal(&Datasets::sample()).unwrap();
        assert_eq!(spec.scales.x.domain, Some((0.0, 1.0)));
        assert_eq!(spec.scales.y.domain, Some((0.0, 1.0)));
        assert_eq!(spec.decor.grid, GridPreset::DiagonalReference);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn grid_variant_differs_only_in_decoration() {
        let datasets = Datasets::sample();
        let a = diagonal(&datasets).unwrap();
        let b = full_grid(&datasets).unwrap();
        assert_eq!(a.table, b.table);
        assert_eq!(b.decor.grid, GridPreset::Full);
    }
}
