use chrono::{Days, NaiveDate};
use enarm_charts::api::{ChannelValue, ChartKind, Mark, RenderOptions, XScaleKind, trend_chart};
use enarm_charts::core::{Curve, DataPoint, TrendField};
use enarm_charts::render::{Color, ItemRole, NullRenderer};

fn full_point(label: &str, y: f64) -> DataPoint {
    DataPoint::new(label, y)
        .with_rolling_avg_3(y - 1.0)
        .with_mean(40.0)
        .with_std_dev_bands(55.0, 25.0)
}

fn full_series() -> Vec<DataPoint> {
    [30.0, 42.0, 38.0, 51.0, 47.0]
        .iter()
        .enumerate()
        .map(|(day, y)| full_point(&format!("2024-03-0{}", day + 1), *y))
        .collect()
}

#[test]
fn trend_spec_layers_five_lines_over_a_dashed_baseline() {
    let data = full_series();
    let spec = trend_chart(&data, 45.0, RenderOptions::default());

    assert_eq!(spec.kind, ChartKind::Trend);
    assert_eq!(spec.x_axis.scale, XScaleKind::Point);
    assert_eq!(spec.x_axis.label, "Fecha");
    assert_eq!(spec.y_axis.label, "Sustentantes");
    assert!(spec.y_axis.grid);
    assert_eq!(spec.line_fields(), TrendField::ALL.to_vec());

    match &spec.marks[0] {
        Mark::RuleY { y, stroke } => {
            assert_eq!(*y, 45.0);
            assert_eq!(stroke.dash, Some([2.0, 2.0]));
            assert_eq!(stroke.color, Color::from_rgb8(0x44, 0x44, 0x44));
        }
        other => panic!("expected baseline rule first, got {other:?}"),
    }
}

#[test]
fn trend_line_styles_follow_the_dashboard_palette() {
    let data = full_series();
    let spec = trend_chart(&data, 45.0, RenderOptions::default());
    let lines: Vec<_> = spec
        .marks
        .iter()
        .filter_map(|mark| match mark {
            Mark::Line {
                field,
                stroke,
                curve,
            } => Some((*field, *stroke, *curve)),
            _ => None,
        })
        .collect();

    let (field, raw, curve) = lines[0];
    assert_eq!(field, TrendField::Raw);
    assert_eq!(raw.color.to_hex(), "#ff8ab7");
    assert_eq!(raw.width, 1.5);
    assert_eq!(curve, Curve::CatmullRom);

    let (_, rolling, _) = lines[1];
    assert_eq!(rolling.color, Color::WHITE);
    assert_eq!(rolling.opacity, 0.2);

    let (_, mean, _) = lines[2];
    assert_eq!(mean.opacity, 0.6);
    assert_eq!(mean.dash, Some([4.0, 4.0]));

    let (_, plus, _) = lines[3];
    let (_, minus, _) = lines[4];
    assert_eq!(plus.color.to_hex(), "#008000");
    assert_eq!(minus.color.to_hex(), "#ff0000");
    assert!(plus.is_dashed() && minus.is_dashed());
}

#[test]
fn pointer_rule_channels_are_ordered_for_the_tooltip() {
    let data = full_series();
    let spec = trend_chart(&data, 45.0, RenderOptions::default());
    let pointer = spec.pointer.as_ref().expect("pointer rule");

    let labels: Vec<&str> = pointer
        .channels
        .values()
        .map(|channel| channel.label.as_str())
        .collect();
    assert_eq!(
        labels,
        [
            "Date",
            "Sustentantes",
            "Rolling Avg.",
            "Avg",
            "+1.5 Std Dev",
            "-1.5 Std Dev"
        ]
    );
    assert_eq!(pointer.channels["date"].value, ChannelValue::X);
    assert_eq!(pointer.headline.value, ChannelValue::Field(TrendField::Raw));
    assert_eq!(pointer.stroke.dash, Some([2.0, 2.0]));
}

#[test]
fn full_series_materializes_one_path_per_line() {
    let data = full_series();
    let view = trend_chart(&data, 45.0, RenderOptions::default())
        .mount(NullRenderer::default(), None)
        .expect("mount");
    let frame = view.build_render_frame().expect("frame");

    for field in TrendField::ALL {
        assert_eq!(frame.count_role(ItemRole::Line(field)), 1, "{field:?}");
    }
    assert_eq!(frame.count_role(ItemRole::BaselineRule), 1);
    assert_eq!(frame.count_role(ItemRole::PointerRule), 0);
}

#[test]
fn missing_mean_splits_only_the_mean_line() {
    let mut data = full_series();
    data[2].y_mean = None;
    let view = trend_chart(&data, 45.0, RenderOptions::default())
        .mount(NullRenderer::default(), None)
        .expect("mount");
    let frame = view.build_render_frame().expect("frame");

    assert_eq!(frame.count_role(ItemRole::Line(TrendField::Mean)), 2);
    assert_eq!(frame.count_role(ItemRole::Line(TrendField::Raw)), 1);
    assert_eq!(frame.count_role(ItemRole::Line(TrendField::StdDevPlus15)), 1);
}

#[test]
fn non_finite_samples_are_gaps_not_errors() {
    let mut data = full_series();
    data[1].y_rolling_avg_3 = Some(f64::NAN);
    data[3].y_rolling_avg_3 = Some(f64::INFINITY);
    let spec = trend_chart(&data, 45.0, RenderOptions::default());
    assert_eq!(spec.non_finite_samples(), 2);
    let mut view = spec.mount(NullRenderer::default(), None).expect("mount");

    let frame = view.build_render_frame().expect("frame");
    // Runs are [0], [2], [4]: none long enough to draw.
    assert_eq!(frame.count_role(ItemRole::Line(TrendField::RollingAvg3)), 0);
    view.render().expect("render");
    assert_eq!(view.spec().non_finite_samples(), 2);
}

#[test]
fn single_point_draws_no_lines_but_keeps_pointer_rule() {
    let data = vec![full_point("2024-03-01", 12.0)];
    let spec = trend_chart(&data, 10.0, RenderOptions::default());
    assert!(spec.is_interactive());

    let view = spec.mount(NullRenderer::default(), None).expect("mount");
    let frame = view.build_render_frame().expect("frame");
    for field in TrendField::ALL {
        assert_eq!(frame.count_role(ItemRole::Line(field)), 0);
    }
}

#[test]
fn empty_trend_chart_has_no_pointer_rule_and_only_scaffolding() {
    let data: Vec<DataPoint> = Vec::new();
    let spec = trend_chart(&data, 45.0, RenderOptions::default());
    assert!(spec.pointer.is_none());

    let mut view = spec.mount(NullRenderer::default(), None).expect("mount");
    let frame = view.build_render_frame().expect("frame");
    assert!(frame.is_scaffolding_only());
    assert_eq!(frame.count_role(ItemRole::BaselineRule), 1);

    view.render().expect("render");
    assert!(!view.renderer().last_tooltip_visible);
}

#[test]
fn x_tick_labels_are_rotated_dates() {
    let data = full_series();
    let view = trend_chart(&data, 45.0, RenderOptions::default())
        .mount(NullRenderer::default(), None)
        .expect("mount");
    let frame = view.build_render_frame().expect("frame");

    let dates: Vec<_> = frame
        .texts_with_role(ItemRole::AxisLabel)
        .into_iter()
        .filter(|text| text.rotation_deg == -90.0)
        .map(|text| text.text.clone())
        .collect();
    assert_eq!(dates.len(), data.len());
    assert_eq!(dates[0], "2024-03-01");

    let titles: Vec<_> = frame
        .texts_with_role(ItemRole::AxisTitle)
        .into_iter()
        .map(|text| text.text.clone())
        .collect();
    assert_eq!(titles, ["↑ Sustentantes", "Fecha →"]);
}

#[test]
fn dated_points_label_the_x_axis_and_tooltip_with_iso_dates() {
    let start = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
    let first = DataPoint::from_date(start, 12.0);
    assert_eq!(first.x, "2024-03-05");
    assert_eq!(first.y, Some(12.0));

    let data: Vec<DataPoint> = (0..3u64)
        .map(|offset| {
            let day = start.checked_add_days(Days::new(offset)).expect("day");
            DataPoint::from_date(day, 12.0 + offset as f64)
        })
        .collect();
    let mut view = trend_chart(&data, 12.0, RenderOptions::default())
        .mount(NullRenderer::default(), None)
        .expect("mount");
    let frame = view.build_render_frame().expect("frame");

    let dates: Vec<String> = frame
        .texts_with_role(ItemRole::AxisLabel)
        .into_iter()
        .filter(|text| text.rotation_deg == -90.0)
        .map(|text| text.text.clone())
        .collect();
    assert_eq!(dates, ["2024-03-05", "2024-03-06", "2024-03-07"]);

    let x = view.map_index_to_pixel(2).expect("x");
    view.pointer_move(x, 100.0);
    let tooltip = view.tooltip().expect("tooltip");
    assert_eq!(tooltip.rows[0].value, "2024-03-07");
}
