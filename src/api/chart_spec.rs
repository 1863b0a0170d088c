use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Curve, DataPoint, TrendField};
use crate::render::{Color, StrokeStyle, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Trend,
}

/// Space reserved around the plot area for axes and titles, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XScaleKind {
    /// One band per category, in input order.
    Band,
    /// One evenly spaced point per observation, in input order.
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisSpec {
    pub scale: XScaleKind,
    pub label: String,
    pub tick_rotate_deg: f64,
    pub grid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisSpec {
    pub label: String,
    pub grid: bool,
    /// Approximate number of ticks; the scale picks round values near it.
    pub tick_count: usize,
}

/// One declarative layer of a chart.
///
/// Data-bound marks reference a [`TrendField`] and are evaluated against the
/// spec's series when the chart is materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mark", rename_all = "snake_case")]
pub enum Mark {
    /// Horizontal rule at a fixed value.
    RuleY { y: f64, stroke: StrokeStyle },
    Line {
        field: TrendField,
        stroke: StrokeStyle,
        curve: Curve,
    },
    /// Vertical bar from zero to the field value, one per band. Drawn only
    /// on a band x scale.
    BarY { field: TrendField, fill: Color },
    /// Field value printed at the top of each band, shifted by `dy` pixels.
    Text {
        field: TrendField,
        fill: Color,
        font_size_px: f64,
        dy: f64,
        align: TextHAlign,
    },
    /// Outline around the plot area.
    Frame { stroke: StrokeStyle },
}

/// Value shown by a tooltip channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelValue {
    /// The point's x label.
    X,
    Field(TrendField),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipChannel {
    pub value: ChannelValue,
    pub label: String,
}

impl TooltipChannel {
    #[must_use]
    pub fn new(value: ChannelValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Interactive vertical rule that follows the pointer and shows a tooltip
/// for the nearest point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerRuleSpec {
    pub stroke: StrokeStyle,
    /// Rounded headline value shown first and in the HTML tooltip body.
    pub headline: TooltipChannel,
    /// Channel rows, in display order, keyed by channel name.
    pub channels: IndexMap<String, TooltipChannel>,
    pub font_size_px: f64,
    pub font_family: String,
}

/// Declarative description of one chart: scales, marks and interaction
/// bindings over a borrowed series.
///
/// Building a spec never fails and never touches external state; validation
/// happens when the spec is mounted and rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec<'a> {
    pub kind: ChartKind,
    /// Fixed pixel width; `None` auto-sizes to the container.
    pub width: Option<u32>,
    pub height: u32,
    pub margins: Margins,
    pub x_axis: XAxisSpec,
    pub y_axis: YAxisSpec,
    /// Marks in paint order, bottom to top.
    pub marks: Vec<Mark>,
    pub pointer: Option<PointerRuleSpec>,
    pub data: &'a [DataPoint],
}

impl<'a> ChartSpec<'a> {
    #[must_use]
    pub fn data(&self) -> &'a [DataPoint] {
        self.data
    }

    /// Value of the first horizontal rule, which both charts use as baseline.
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.marks.iter().find_map(|mark| match mark {
            Mark::RuleY { y, .. } => Some(*y),
            _ => None,
        })
    }

    /// Fields drawn as lines, in paint order.
    #[must_use]
    pub fn line_fields(&self) -> Vec<TrendField> {
        self.marks
            .iter()
            .filter_map(|mark| match mark {
                Mark::Line { field, .. } => Some(*field),
                _ => None,
            })
            .collect()
    }

    /// Samples read by line marks that are present but not finite. They
    /// render as gaps, like missing values.
    #[must_use]
    pub fn non_finite_samples(&self) -> usize {
        self.line_fields()
            .into_iter()
            .map(|field| {
                self.data
                    .iter()
                    .filter(|point| field.raw(point).is_some_and(|value| !value.is_finite()))
                    .count()
            })
            .sum()
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.pointer.is_some()
    }
}
