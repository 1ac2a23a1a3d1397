//! Translation from chart specifications to the external charting engine.

use charming::component::{Legend, Title};
use charming::element::{AxisType, LineStyle, LineStyleType, Symbol};
use charming::series::{Bar, Line, Scatter};
use charming::theme::Theme as EngineTheme;
use charming::{Chart, HtmlRenderer, ImageRenderer};

use chartbook_core::domain::{ObsKey, ObservationTable};
use chartbook_core::spec::{AxisKind, ChartSpec, GeomKind, GridPreset, SpecError, Theme};

use crate::decor;

/// Errors from the rendering layer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid chart specification: {0}")]
    Spec(#[from] SpecError),

    #[error("group '{group}' has no value at key '{key}'")]
    MisalignedSeries { group: String, key: String },

    #[error("charting backend error: {0}")]
    Backend(String),
}

/// Symbols cycled through when the shape channel encodes the group.
const GROUP_SYMBOLS: [Symbol; 6] = [
    Symbol::Circle,
    Symbol::Rect,
    Symbol::Triangle,
    Symbol::Diamond,
    Symbol::Pin,
    Symbol::Arrow,
];

/// Build the engine's chart object from a validated specification.
///
/// This is where the declarative spec meets the imperative builder: axes
/// from the scales, one series per group (or one series total), grid and
/// axis decoration from the preset, an optional dashed y = x reference.
pub fn to_chart(spec: &ChartSpec) -> Result<Chart, RenderError> {
    spec.validate()?;

    let mut chart = Chart::new().title(Title::new().text(spec.title.clone()));

    if let Some(bg) = spec.theme.background() {
        chart = chart.background_color(bg);
    }

    chart = chart
        .x_axis(decor::x_axis(spec))
        .y_axis(decor::y_axis(spec));

    let groups = series_groups(spec);
    if spec.decor.legend && spec.mapping.grouped() {
        chart = chart.legend(Legend::new().data(groups.clone()));
    }

    for (i, group) in groups.iter().enumerate() {
        chart = add_series(chart, spec, group, i)?;
    }

    if spec.decor.grid == GridPreset::DiagonalReference {
        chart = chart.series(diagonal_reference(spec));
    }

    Ok(chart)
}

/// Render a spec to an SVG document.
pub fn render_svg(spec: &ChartSpec, width: u32, height: u32) -> Result<String, RenderError> {
    let chart = to_chart(spec)?;
    let mut renderer = ImageRenderer::new(width, height).theme(engine_theme(spec.theme));
    renderer
        .render(&chart)
        .map_err(|e| RenderError::Backend(e.to_string()))
}

/// Render a spec to a self-contained HTML page.
pub fn render_html(spec: &ChartSpec, width: u32, height: u32) -> Result<String, RenderError> {
    let chart = to_chart(spec)?;
    let mut renderer = HtmlRenderer::new(spec.title.clone(), width.into(), height.into())
        .theme(engine_theme(spec.theme));
    renderer
        .render(&chart)
        .map_err(|e| RenderError::Backend(e.to_string()))
}

fn engine_theme(theme: Theme) -> EngineTheme {
    match theme {
        // Gray paints its own background; the engine theme stays default.
        Theme::Gray | Theme::White => EngineTheme::Default,
        Theme::Dark => EngineTheme::Dark,
    }
}

/// Groups to draw as separate series. Ungrouped specs get one anonymous
/// series carrying the table name.
fn series_groups(spec: &ChartSpec) -> Vec<String> {
    if spec.mapping.grouped() {
        spec.table.groups()
    } else {
        vec![spec.table.name().to_string()]
    }
}

fn add_series(
    chart: Chart,
    spec: &ChartSpec,
    group: &str,
    index: usize,
) -> Result<Chart, RenderError> {
    let rows = group_rows(&spec.table, spec.mapping.grouped(), group);

    let chart = match (spec.geom, spec.scales.x.kind) {
        (GeomKind::Line, AxisKind::Linear) => {
            chart.series(Line::new().name(group).data(numeric_pairs(&rows)))
        }
        (GeomKind::Line, _) => {
            let values = aligned_values(spec, group, &rows)?;
            chart.series(Line::new().name(group).data(values))
        }
        (GeomKind::Point, AxisKind::Linear) => {
            let mut scatter = Scatter::new()
                .name(group)
                .symbol_size(10)
                .data(numeric_pairs(&rows));
            if spec.mapping.shape.is_some() {
                scatter = scatter.symbol(GROUP_SYMBOLS[index % GROUP_SYMBOLS.len()].clone());
            }
            chart.series(scatter)
        }
        (GeomKind::Point, _) => {
            let values = aligned_values(spec, group, &rows)?;
            chart.series(Scatter::new().name(group).symbol_size(10).data(values))
        }
        (GeomKind::Column, _) => {
            let values = aligned_values(spec, group, &rows)?;
            chart.series(Bar::new().name(group).data(values))
        }
    };

    Ok(chart)
}

fn group_rows<'a>(
    table: &'a ObservationTable,
    grouped: bool,
    group: &str,
) -> Vec<&'a chartbook_core::domain::Observation> {
    if grouped {
        table.group_rows(group)
    } else {
        table.iter().collect()
    }
}

/// [x, y] pairs for value axes.
fn numeric_pairs(rows: &[&chartbook_core::domain::Observation]) -> Vec<Vec<f64>> {
    rows.iter()
        .filter_map(|r| r.key.as_numeric().map(|x| vec![x, r.value]))
        .collect()
}

/// Per-key y values aligned to the categorical axis tick order.
///
/// Every group must cover every tick; a gap is a data error, not something
/// to paper over with interpolation.
fn aligned_values(
    spec: &ChartSpec,
    group: &str,
    rows: &[&chartbook_core::domain::Observation],
) -> Result<Vec<f64>, RenderError> {
    spec.table
        .distinct_keys()
        .iter()
        .map(|key| {
            rows.iter()
                .find(|r| r.key == *key)
                .map(|r| r.value)
                .ok_or_else(|| RenderError::MisalignedSeries {
                    group: group.to_string(),
                    key: key.label(),
                })
        })
        .collect()
}

/// The dashed y = x reference series.
fn diagonal_reference(spec: &ChartSpec) -> Line {
    let (lo, hi) = diagonal_domain(spec);
    Line::new()
        .name("y = x")
        .data(vec![vec![lo, lo], vec![hi, hi]])
        .line_style(
            LineStyle::new()
                .type_(LineStyleType::Dashed)
                .color(spec.theme.grid_color()),
        )
}

/// Domain of the reference line: the fixed axis domain when given,
/// otherwise the square hull of the data.
fn diagonal_domain(spec: &ChartSpec) -> (f64, f64) {
    if let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (spec.scales.x.domain, spec.scales.y.domain) {
        return (x_lo.min(y_lo), x_hi.max(y_hi));
    }
    let (kx_lo, kx_hi) = spec.table.key_range().unwrap_or((0.0, 1.0));
    let (v_lo, v_hi) = spec.table.value_range().unwrap_or((0.0, 1.0));
    (kx_lo.min(v_lo), kx_hi.max(v_hi))
}

/// Axis kind mapping shared with the decoration module.
pub(crate) fn axis_type(kind: AxisKind) -> AxisType {
    match kind {
        // Monthly time series sit on a category axis with date labels.
        AxisKind::Categorical | AxisKind::Time => AxisType::Category,
        AxisKind::Linear => AxisType::Value,
    }
}

/// Tick labels for a category/time x axis.
pub(crate) fn category_labels(table: &ObservationTable) -> Vec<String> {
    table
        .distinct_keys()
        .iter()
        .map(ObsKey::label)
        .collect()
}
