//! Applying decoration presets to the engine's axes.
//!
//! Vertical grid lines belong to the x axis, horizontal lines to the y
//! axis, so a preset turns into two per-axis `SplitLine` switches plus a
//! split count for density and an `AxisLine` switch for the frame.

use charming::component::Axis;
use charming::element::{AxisLine, LineStyle, SplitLine};

use chartbook_core::spec::{AxisKind, AxisScale, ChartSpec, GridDensity};

use crate::renderer::{axis_type, category_labels};

/// Split count for the "too many grid lines" examples. The engine's
/// default sits around five or six.
const DENSE_SPLITS: f64 = 15.0;

pub(crate) fn x_axis(spec: &ChartSpec) -> Axis {
    let mut axis = base_axis(spec, &spec.scales.x, spec.decor.grid.vertical_lines());

    if spec.scales.x.kind != AxisKind::Linear {
        axis = axis.data(category_labels(&spec.table));
    }

    axis
}

pub(crate) fn y_axis(spec: &ChartSpec) -> Axis {
    let mut axis = base_axis(spec, &spec.scales.y, spec.decor.grid.horizontal_lines());

    // Value axes auto-fit unless the figure pins the domain.
    if spec.scales.y.domain.is_none() {
        axis = axis.scale(true);
    }

    axis
}

fn base_axis(spec: &ChartSpec, scale: &AxisScale, grid_lines: bool) -> Axis {
    let mut axis = Axis::new().type_(axis_type(scale.kind));

    if let Some(label) = &scale.label {
        axis = axis.name(label.clone());
    }
    if let Some((min, max)) = scale.domain {
        axis = axis.min(min).max(max);
    }

    let mut split_line = SplitLine::new().show(grid_lines);
    if grid_lines {
        split_line = split_line.line_style(LineStyle::new().color(spec.theme.grid_color()));
    }
    axis = axis.split_line(split_line);

    if grid_lines && spec.decor.density == GridDensity::Dense && scale.domain.is_none() {
        axis = axis.split_number(DENSE_SPLITS);
    }

    axis.axis_line(AxisLine::new().show(spec.decor.axis_lines))
}
