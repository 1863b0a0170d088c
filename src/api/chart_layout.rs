use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, PointScale, TrendField, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{ChartSpec, Mark, XScaleKind};

/// Width used when neither the spec nor the container provides one.
pub const DEFAULT_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 400;

/// Inner rectangle where marks are drawn, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Resolved horizontal scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum XScale {
    Band(BandScale),
    Point(PointScale),
}

impl XScale {
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            XScale::Band(scale) => scale.count(),
            XScale::Point(scale) => scale.count(),
        }
    }

    /// Anchor pixel of the observation at `index`: band center or point.
    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        match self {
            XScale::Band(scale) => scale.center(index),
            XScale::Point(scale) => scale.position(index),
        }
    }

    /// Leading edge and width of the band at `index`; points have no band.
    #[must_use]
    pub fn band(self, index: usize) -> Option<(f64, f64)> {
        match self {
            XScale::Band(scale) => scale.position(index).map(|start| (start, scale.bandwidth())),
            XScale::Point(_) => None,
        }
    }
}

/// Geometry of a chart for one container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub x: XScale,
    pub y: LinearScale,
}

impl ChartLayout {
    /// Resolves the chart size and both scales.
    ///
    /// Width precedence: the spec's fixed width, then `container_width`,
    /// then [`DEFAULT_WIDTH`]. The y domain covers the baseline and every
    /// finite value a mark reads, plus zero when bars are drawn, extended to
    /// round ticks.
    pub fn resolve(spec: &ChartSpec<'_>, container_width: Option<u32>) -> ChartResult<Self> {
        let width = spec
            .width
            .or(container_width.filter(|width| *width > 0))
            .unwrap_or(DEFAULT_WIDTH);
        let viewport = Viewport::new(width, spec.height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width,
                height: spec.height,
            });
        }

        let margins = spec.margins;
        let plot = PlotArea {
            left: margins.left,
            top: margins.top,
            right: f64::from(width) - margins.right,
            bottom: f64::from(spec.height) - margins.bottom,
        };
        if !(plot.width() > 0.0 && plot.height() > 0.0) {
            return Err(ChartError::InvalidViewport {
                width,
                height: spec.height,
            });
        }

        let count = spec.data.len();
        let x = match spec.x_axis.scale {
            XScaleKind::Band => XScale::Band(BandScale::new(count, plot.left, plot.right)?),
            XScaleKind::Point => XScale::Point(PointScale::new(count, plot.left, plot.right)?),
        };

        let y = LinearScale::from_values(y_domain_values(spec), spec.y_axis.tick_count)?
            .with_range(plot.bottom, plot.top)?;

        Ok(Self {
            viewport,
            plot,
            x,
            y,
        })
    }
}

fn y_domain_values(spec: &ChartSpec<'_>) -> Vec<f64> {
    let mut values = Vec::with_capacity(spec.data.len() * 2 + 2);
    for mark in &spec.marks {
        match mark {
            Mark::RuleY { y, .. } => values.push(*y),
            Mark::Line { field, .. } | Mark::Text { field, .. } => {
                values.extend(field_values(spec, *field));
            }
            Mark::BarY { field, .. } => {
                values.push(0.0);
                values.extend(field_values(spec, *field));
            }
            Mark::Frame { .. } => {}
        }
    }
    values
}

fn field_values<'s>(spec: &'s ChartSpec<'_>, field: TrendField) -> impl Iterator<Item = f64> + 's {
    spec.data.iter().filter_map(move |point| field.value(point))
}
