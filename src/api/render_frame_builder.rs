use crate::core::format::{format_number, format_tick};
use crate::core::{DataPoint, TrendField};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerRuleState;
use crate::render::{
    Color, ItemRole, LinePrimitive, PathPrimitive, Primitive, RectPrimitive, RenderFrame,
    StrokeStyle, TextHAlign, TextPrimitive,
};

use super::{ChartLayout, ChartSpec, Mark, Tooltip};

const AXIS_COLOR: Color = Color::BLACK;
const GRID_OPACITY: f64 = 0.1;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const AXIS_FONT_PX: f64 = 10.0;

const TOOLTIP_OFFSET_PX: f64 = 8.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TOOLTIP_LINE_HEIGHT: f64 = 1.3;
const TOOLTIP_CHAR_WIDTH: f64 = 0.6;
const TOOLTIP_FILL: Color = Color::WHITE;
const TOOLTIP_BORDER: Color = Color::from_rgb8(128, 128, 128);

/// Materializes a spec into an ordered list of draw items.
///
/// Order: grid, axes, marks in spec order, then the pointer rule and its
/// tooltip while hovering.
pub(crate) fn build_render_frame(
    spec: &ChartSpec<'_>,
    layout: &ChartLayout,
    pointer: PointerRuleState,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(layout.viewport);

    append_grid(&mut frame, spec, layout)?;
    append_axes(&mut frame, spec, layout)?;
    for mark in &spec.marks {
        append_mark(&mut frame, spec.data, layout, mark)?;
    }
    append_pointer(&mut frame, spec, layout, pointer);

    Ok(frame)
}

fn grid_stroke() -> StrokeStyle {
    StrokeStyle::solid(AXIS_COLOR, 1.0).with_opacity(GRID_OPACITY)
}

fn append_grid(
    frame: &mut RenderFrame,
    spec: &ChartSpec<'_>,
    layout: &ChartLayout,
) -> ChartResult<()> {
    let plot = layout.plot;
    if spec.y_axis.grid {
        for tick in layout.y.ticks(spec.y_axis.tick_count) {
            let y = layout.y.domain_to_pixel(tick)?;
            frame.push(
                ItemRole::GridLine,
                Primitive::Line(LinePrimitive::new(plot.left, y, plot.right, y, grid_stroke())),
            );
        }
    }
    if spec.x_axis.grid {
        for index in 0..layout.x.count() {
            let Some(x) = layout.x.position(index) else {
                continue;
            };
            frame.push(
                ItemRole::GridLine,
                Primitive::Line(LinePrimitive::new(x, plot.top, x, plot.bottom, grid_stroke())),
            );
        }
    }
    Ok(())
}

fn append_axes(
    frame: &mut RenderFrame,
    spec: &ChartSpec<'_>,
    layout: &ChartLayout,
) -> ChartResult<()> {
    let plot = layout.plot;
    let axis_stroke = StrokeStyle::solid(AXIS_COLOR, 1.0);

    let tick_count = spec.y_axis.tick_count;
    let step = layout.y.tick_step(tick_count);
    for tick in layout.y.ticks(tick_count) {
        let y = layout.y.domain_to_pixel(tick)?;
        frame.push(
            ItemRole::AxisTick,
            Primitive::Line(LinePrimitive::new(
                plot.left - TICK_SIZE_PX,
                y,
                plot.left,
                y,
                axis_stroke,
            )),
        );
        frame.push(
            ItemRole::AxisLabel,
            Primitive::Text(TextPrimitive::new(
                format_tick(tick, step),
                plot.left - TICK_SIZE_PX - TICK_PADDING_PX,
                y + AXIS_FONT_PX * 0.32,
                AXIS_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            )),
        );
    }

    let rotation = spec.x_axis.tick_rotate_deg;
    let label_align = if rotation < 0.0 {
        TextHAlign::Right
    } else if rotation > 0.0 {
        TextHAlign::Left
    } else {
        TextHAlign::Center
    };
    for (index, point) in spec.data.iter().enumerate() {
        let Some(x) = layout.x.position(index) else {
            continue;
        };
        frame.push(
            ItemRole::AxisTick,
            Primitive::Line(LinePrimitive::new(
                x,
                plot.bottom,
                x,
                plot.bottom + TICK_SIZE_PX,
                axis_stroke,
            )),
        );
        if point.x.is_empty() {
            continue;
        }
        frame.push(
            ItemRole::AxisLabel,
            Primitive::Text(
                TextPrimitive::new(
                    point.x.clone(),
                    x,
                    plot.bottom + TICK_SIZE_PX + TICK_PADDING_PX,
                    AXIS_FONT_PX,
                    AXIS_COLOR,
                    label_align,
                )
                .rotated(rotation),
            ),
        );
    }

    if !spec.y_axis.label.is_empty() {
        frame.push(
            ItemRole::AxisTitle,
            Primitive::Text(TextPrimitive::new(
                format!("↑ {}", spec.y_axis.label),
                plot.left - spec.margins.left + TICK_PADDING_PX,
                plot.top - AXIS_FONT_PX,
                AXIS_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Left,
            )),
        );
    }
    if !spec.x_axis.label.is_empty() {
        frame.push(
            ItemRole::AxisTitle,
            Primitive::Text(TextPrimitive::new(
                format!("{} →", spec.x_axis.label),
                plot.right,
                f64::from(layout.viewport.height) - TICK_PADDING_PX,
                AXIS_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            )),
        );
    }
    Ok(())
}

fn append_mark(
    frame: &mut RenderFrame,
    data: &[DataPoint],
    layout: &ChartLayout,
    mark: &Mark,
) -> ChartResult<()> {
    let plot = layout.plot;
    match mark {
        Mark::RuleY { y, stroke } => {
            if !y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "rule value must be finite, got {y}"
                )));
            }
            let y_px = layout.y.domain_to_pixel(*y)?;
            frame.push(
                ItemRole::BaselineRule,
                Primitive::Line(LinePrimitive::new(plot.left, y_px, plot.right, y_px, *stroke)),
            );
        }
        Mark::Line {
            field,
            stroke,
            curve,
        } => {
            for run in defined_runs(data, layout, *field)? {
                if run.len() < 2 {
                    continue;
                }
                frame.push(
                    ItemRole::Line(*field),
                    Primitive::Path(PathPrimitive::new(curve.path(&run), *stroke)),
                );
            }
        }
        Mark::BarY { field, fill } => {
            let zero = layout.y.domain_to_pixel(0.0)?;
            for (index, point) in data.iter().enumerate() {
                let Some(value) = field.value(point) else {
                    continue;
                };
                let Some((start, width)) = layout.x.band(index) else {
                    continue;
                };
                let top = layout.y.domain_to_pixel(value)?;
                frame.push(
                    ItemRole::Bar,
                    Primitive::Rect(RectPrimitive::filled(
                        start,
                        top.min(zero),
                        width,
                        (zero - top).abs(),
                        *fill,
                    )),
                );
            }
        }
        Mark::Text {
            field,
            fill,
            font_size_px,
            dy,
            align,
        } => {
            for (index, point) in data.iter().enumerate() {
                let Some(value) = field.value(point) else {
                    continue;
                };
                let Some(x) = layout.x.position(index) else {
                    continue;
                };
                let y = layout.y.domain_to_pixel(value)? + dy;
                frame.push(
                    ItemRole::ValueLabel,
                    Primitive::Text(TextPrimitive::new(
                        format_number(value),
                        x,
                        y,
                        *font_size_px,
                        *fill,
                        *align,
                    )),
                );
            }
        }
        Mark::Frame { stroke } => {
            frame.push(
                ItemRole::Frame,
                Primitive::Rect(RectPrimitive::outlined(
                    plot.left,
                    plot.top,
                    plot.width(),
                    plot.height(),
                    *stroke,
                )),
            );
        }
    }
    Ok(())
}

/// Splits a field into runs of consecutive finite points, in pixel space.
fn defined_runs(
    data: &[DataPoint],
    layout: &ChartLayout,
    field: TrendField,
) -> ChartResult<Vec<Vec<(f64, f64)>>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (index, point) in data.iter().enumerate() {
        match (field.value(point), layout.x.position(index)) {
            (Some(value), Some(x)) => current.push((x, layout.y.domain_to_pixel(value)?)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    Ok(runs)
}

fn append_pointer(
    frame: &mut RenderFrame,
    spec: &ChartSpec<'_>,
    layout: &ChartLayout,
    pointer: PointerRuleState,
) {
    let Some(pointer_spec) = &spec.pointer else {
        return;
    };
    if !pointer.is_hovering() {
        return;
    }
    let Some(snap) = pointer.snap() else {
        return;
    };
    let Some(point) = spec.data.get(snap.index) else {
        return;
    };
    let plot = layout.plot;

    frame.push(
        ItemRole::PointerRule,
        Primitive::Line(LinePrimitive::new(
            snap.x,
            plot.top,
            snap.x,
            plot.bottom,
            pointer_spec.stroke,
        )),
    );

    let tooltip = Tooltip::for_point(pointer_spec, point);
    let lines = tooltip.lines();
    let font_size = pointer_spec.font_size_px;
    let line_height = font_size * TOOLTIP_LINE_HEIGHT;
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let box_width = longest * font_size * TOOLTIP_CHAR_WIDTH + TOOLTIP_PADDING_PX * 2.0;
    let box_height = lines.len() as f64 * line_height + TOOLTIP_PADDING_PX * 2.0;

    let viewport_width = f64::from(layout.viewport.width);
    let viewport_height = f64::from(layout.viewport.height);
    let mut box_x = snap.x + TOOLTIP_OFFSET_PX;
    if box_x + box_width > viewport_width {
        box_x = snap.x - TOOLTIP_OFFSET_PX - box_width;
    }
    let box_x = box_x.max(0.0);
    let (_, cursor_y) = pointer.cursor();
    let anchor_y = snap.y.unwrap_or(cursor_y);
    let lowest_top = (viewport_height - box_height).max(0.0);
    let box_y = anchor_y.clamp(plot.top.min(lowest_top), lowest_top);

    frame.push(
        ItemRole::Tooltip,
        Primitive::Rect(
            RectPrimitive::filled(box_x, box_y, box_width, box_height, TOOLTIP_FILL)
                .with_stroke(StrokeStyle::solid(TOOLTIP_BORDER, 1.0)),
        ),
    );
    for (row, line) in lines.into_iter().enumerate() {
        let text = TextPrimitive::new(
            line,
            box_x + TOOLTIP_PADDING_PX,
            box_y + TOOLTIP_PADDING_PX + line_height * (row as f64 + 0.8),
            font_size,
            AXIS_COLOR,
            TextHAlign::Left,
        );
        let text = if row == 0 { text.bold() } else { text };
        frame.push(ItemRole::Tooltip, Primitive::Text(text));
    }
}
