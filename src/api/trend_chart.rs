use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Curve, DataPoint, TrendField};
use crate::render::{Color, StrokeStyle};

use super::{
    CHART_HEIGHT, ChannelValue, ChartKind, ChartSpec, Margins, Mark, PointerRuleSpec,
    RenderOptions, TooltipChannel, XAxisSpec, XScaleKind, YAxisSpec,
};

const TREND_MARGINS: Margins = Margins::new(40.0, 20.0, 100.0, 60.0);
const TREND_Y_TICKS: usize = 8;
const LINE_WIDTH: f64 = 1.5;

const BASELINE_GRAY: Color = Color::from_rgb8(0x44, 0x44, 0x44);
const RAW_PINK: Color = Color::from_rgb8(0xff, 0x8a, 0xb7);
const MEAN_GRAY: Color = Color::from_rgb8(128, 128, 128);
const ABOVE_NORMAL_GREEN: Color = Color::from_rgb8(0, 128, 0);
const BELOW_NORMAL_RED: Color = Color::from_rgb8(255, 0, 0);

const TOOLTIP_FONT_PX: f64 = 13.0;

/// Builds the daily trend chart.
///
/// Paint order, bottom to top: dashed baseline rule, raw counts (smoothed),
/// 3-point rolling average (faded), run mean (dashed), and the ±1.5σ band
/// edges (dashed green above, red below). A pointer rule is attached when
/// the series has at least one point.
pub fn trend_chart(data: &[DataPoint], baseline: f64, options: RenderOptions) -> ChartSpec<'_> {
    debug!(
        points = data.len(),
        baseline,
        width = ?options.width,
        "build trend chart spec"
    );

    let dashed = |color: Color| StrokeStyle::solid(color, LINE_WIDTH).with_dash(4.0, 4.0);

    ChartSpec {
        kind: ChartKind::Trend,
        width: options.width,
        height: CHART_HEIGHT,
        margins: TREND_MARGINS,
        x_axis: XAxisSpec {
            scale: XScaleKind::Point,
            label: "Fecha".to_owned(),
            tick_rotate_deg: -90.0,
            grid: true,
        },
        y_axis: YAxisSpec {
            label: "Sustentantes".to_owned(),
            grid: true,
            tick_count: TREND_Y_TICKS,
        },
        marks: vec![
            Mark::RuleY {
                y: baseline,
                stroke: StrokeStyle::solid(BASELINE_GRAY, 1.0).with_dash(2.0, 2.0),
            },
            Mark::Line {
                field: TrendField::Raw,
                stroke: StrokeStyle::solid(RAW_PINK, LINE_WIDTH),
                curve: Curve::CatmullRom,
            },
            Mark::Line {
                field: TrendField::RollingAvg3,
                stroke: StrokeStyle::solid(Color::WHITE, LINE_WIDTH).with_opacity(0.2),
                curve: Curve::Linear,
            },
            Mark::Line {
                field: TrendField::Mean,
                stroke: dashed(MEAN_GRAY).with_opacity(0.6),
                curve: Curve::Linear,
            },
            Mark::Line {
                field: TrendField::StdDevPlus15,
                stroke: dashed(ABOVE_NORMAL_GREEN),
                curve: Curve::Linear,
            },
            Mark::Line {
                field: TrendField::StdDevMinus15,
                stroke: dashed(BELOW_NORMAL_RED),
                curve: Curve::Linear,
            },
        ],
        pointer: (!data.is_empty()).then(pointer_rule),
        data,
    }
}

fn pointer_rule() -> PointerRuleSpec {
    let channels: IndexMap<String, TooltipChannel> = [
        ("date", ChannelValue::X, "Date"),
        ("shows", ChannelValue::Field(TrendField::Raw), "Sustentantes"),
        (
            "rolling_avg_3",
            ChannelValue::Field(TrendField::RollingAvg3),
            "Rolling Avg.",
        ),
        ("avg_shows", ChannelValue::Field(TrendField::Mean), "Avg"),
        (
            "std_dev_plus_1_5",
            ChannelValue::Field(TrendField::StdDevPlus15),
            "+1.5 Std Dev",
        ),
        (
            "std_dev_minus_1_5",
            ChannelValue::Field(TrendField::StdDevMinus15),
            "-1.5 Std Dev",
        ),
    ]
    .into_iter()
    .map(|(key, value, label)| (key.to_owned(), TooltipChannel::new(value, label)))
    .collect();

    PointerRuleSpec {
        stroke: StrokeStyle::solid(Color::BLACK, 1.0).with_dash(2.0, 2.0),
        headline: TooltipChannel::new(ChannelValue::Field(TrendField::Raw), "Sustentantes"),
        channels,
        font_size_px: TOOLTIP_FONT_PX,
        font_family: "sans-serif".to_owned(),
    }
}
