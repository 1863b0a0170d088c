use criterion::{Criterion, criterion_group, criterion_main};
use enarm_charts::api::{RenderOptions, trend_chart};
use enarm_charts::core::{Curve, DataPoint};
use enarm_charts::render::{NullRenderer, SvgRenderer};
use std::hint::black_box;

fn daily_series(days: usize) -> Vec<DataPoint> {
    (0..days)
        .map(|day| {
            let y = 200.0 + (day as f64 * 0.37).sin() * 60.0 + (day % 7) as f64 * 4.0;
            DataPoint::new(format!("d{day}"), y)
                .with_rolling_avg_3(y * 0.98)
                .with_mean(210.0)
                .with_std_dev_bands(300.0, 120.0)
        })
        .collect()
}

fn bench_nearest_point_2k(c: &mut Criterion) {
    let data = daily_series(2_000);
    let view = trend_chart(&data, 250.0, RenderOptions::new().with_width(1600))
        .mount(NullRenderer::default(), None)
        .expect("mount");

    c.bench_function("nearest_point_2k", |b| {
        b.iter(|| {
            let _ = view.snap_at_x(black_box(811.3));
        })
    });
}

fn bench_catmull_rom_path_10k(c: &mut Criterion) {
    let points: Vec<(f64, f64)> = (0..10_000)
        .map(|i| (i as f64 * 0.1, (i as f64 * 0.01).sin() * 100.0))
        .collect();

    c.bench_function("catmull_rom_path_10k", |b| {
        b.iter(|| {
            let _ = Curve::CatmullRom.path(black_box(&points));
        })
    });
}

fn bench_trend_frame_365(c: &mut Criterion) {
    let data = daily_series(365);
    let mut view = trend_chart(&data, 250.0, RenderOptions::default())
        .mount(NullRenderer::default(), None)
        .expect("mount");
    view.pointer_move(320.0, 200.0);

    c.bench_function("trend_frame_365", |b| {
        b.iter(|| {
            let _ = view.build_render_frame().expect("frame");
        })
    });
}

fn bench_trend_svg_365(c: &mut Criterion) {
    let data = daily_series(365);
    let mut view = trend_chart(&data, 250.0, RenderOptions::default())
        .mount(SvgRenderer::new(), None)
        .expect("mount");

    c.bench_function("trend_svg_365", |b| {
        b.iter(|| {
            view.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_nearest_point_2k,
    bench_catmull_rom_path_10k,
    bench_trend_frame_365,
    bench_trend_svg_365
);
criterion_main!(benches);
