//! Athlete figures: height vs weight scatter and the per-sport summary
//! columns, both on the regrouped table.

use chartbook_core::data::sample;
use chartbook_core::spec::{
    AxisScale, ChannelMapping, ChartSpec, Decoration, GeomKind, ScalePair, Theme,
};
use chartbook_core::transform::{summary_table, SummaryStat};

use super::{Datasets, FigureError};

pub(super) fn scatter(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let by_sport = sample::athlete_regrouper().apply(&datasets.athletes)?;

    Ok(ChartSpec {
        title: "Athlete height vs weight".to_string(),
        table: by_sport,
        mapping: ChannelMapping::xy_colored_shaped(),
        geom: GeomKind::Point,
        scales: ScalePair {
            x: AxisScale::linear().with_label("height (cm)"),
            y: AxisScale::linear().with_label("weight (kg)"),
        },
        decor: Decoration::default(),
        theme: Theme::White,
    })
}

pub(super) fn columns(datasets: &Datasets) -> Result<ChartSpec, FigureError> {
    let by_sport = sample::athlete_regrouper().apply(&datasets.athletes)?;
    let summary = summary_table(&by_sport, SummaryStat::Mean)?;

    Ok(ChartSpec {
        title: "Mean athlete weight by sport".to_string(),
        table: summary,
        mapping: ChannelMapping::xy(),
        geom: GeomKind::Column,
        scales: ScalePair {
            x: AxisScale::categorical(),
            y: AxisScale::linear().with_label("mean weight (kg)"),
        },
        decor: Decoration::minimal_horizontal().without_legend(),
        theme: Theme::White,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_uses_sport_labels_not_disciplines() {
        let spec = scatter(&Datasets::sample()).unwrap();
        let groups = spec.table.groups();
        assert!(groups.contains(&"track".to_string()));
        assert!(!groups.iter().any(|g| g.contains('(')));
    }

    #[test]
    fn columns_are_ordered_by_mean_weight() {
        let spec = columns(&Datasets::sample()).unwrap();
        let values: Vec<f64> = spec.table.iter().map(|r| r.value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // Gymnasts are the lightest group in the sample.
        assert_eq!(spec.table.rows()[0].key.label(), "gymnastics");
    }
}
