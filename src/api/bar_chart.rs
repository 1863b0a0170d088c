use tracing::debug;

use crate::core::{DataPoint, TrendField};
use crate::render::{Color, StrokeStyle, TextHAlign};

use super::{
    CHART_HEIGHT, ChartKind, ChartSpec, Margins, Mark, RenderOptions, XAxisSpec, XScaleKind,
    YAxisSpec,
};

const BAR_FILL: Color = Color::from_rgb8(70, 130, 180);
const BAR_MARGINS: Margins = Margins::new(30.0, 20.0, 100.0, 60.0);
const BAR_Y_TICKS: usize = 5;
const VALUE_LABEL_FONT_PX: f64 = 10.0;
const VALUE_LABEL_DY: f64 = -6.0;

/// Builds the per-category bar chart.
///
/// Paint order: baseline rule, one bar per point (band x axis in input
/// order), the value of each bar printed just above its top, and a frame
/// around the plot area. Points without a raw count get neither bar nor
/// label.
pub fn bar_chart(data: &[DataPoint], baseline: f64, options: RenderOptions) -> ChartSpec<'_> {
    debug!(
        points = data.len(),
        baseline,
        width = ?options.width,
        "build bar chart spec"
    );

    ChartSpec {
        kind: ChartKind::Bar,
        width: options.width,
        height: CHART_HEIGHT,
        margins: BAR_MARGINS,
        x_axis: XAxisSpec {
            scale: XScaleKind::Band,
            label: "dateofrequest".to_owned(),
            tick_rotate_deg: -90.0,
            grid: true,
        },
        y_axis: YAxisSpec {
            label: "# of Sustentantes".to_owned(),
            grid: true,
            tick_count: BAR_Y_TICKS,
        },
        marks: vec![
            Mark::RuleY {
                y: baseline,
                stroke: StrokeStyle::solid(Color::BLACK, 1.0),
            },
            Mark::BarY {
                field: TrendField::Raw,
                fill: BAR_FILL,
            },
            Mark::Text {
                field: TrendField::Raw,
                fill: Color::WHITE,
                font_size_px: VALUE_LABEL_FONT_PX,
                dy: VALUE_LABEL_DY,
                align: TextHAlign::Center,
            },
            Mark::Frame {
                stroke: StrokeStyle::solid(Color::BLACK, 1.0),
            },
        ],
        pointer: None,
        data,
    }
}
