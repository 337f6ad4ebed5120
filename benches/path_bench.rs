use criterion::{Criterion, criterion_group, criterion_main};
use plotline_rs::api::{LineChart, LineChartConfig};
use plotline_rs::core::{Interpolation, Padding, PathBuilder, Point, ScaleContext, Series};
use plotline_rs::render::RecordingSurface;
use std::hint::black_box;

fn scale_for(series_count: usize) -> ScaleContext {
    ScaleContext {
        x_tick: 3.0,
        y_ticks: vec![0.4; series_count],
        min_vals: vec![0.0; series_count],
        padding: Padding::new(10.0, 4.0, 16.0),
        canvas_height: 900.0,
        show_every: 10,
    }
}

fn sawtooth_points(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            // One gap every 97 points keeps the null-handling branches hot.
            if i % 97 == 0 {
                Point::gap()
            } else {
                Point::new(((i % 50) as f64) * 4.0 + 25.0)
            }
        })
        .collect()
}

fn bench_path_build_10k(c: &mut Criterion) {
    let points = sawtooth_points(10_000);
    let scale = scale_for(1);

    c.bench_function("path_build_10k", |b| {
        b.iter(|| {
            let mut builder = PathBuilder::new(
                0,
                black_box(points.clone()),
                Interpolation::None,
                false,
                scale.clone(),
            );
            while builder.advance().is_some() {}
            black_box(builder.path().len())
        })
    });
}

fn bench_step_path_build_10k(c: &mut Criterion) {
    let points = sawtooth_points(10_000);
    let scale = scale_for(1);

    c.bench_function("step_path_build_10k", |b| {
        b.iter(|| {
            let mut builder = PathBuilder::new(
                0,
                black_box(points.clone()),
                Interpolation::Step,
                true,
                scale.clone(),
            );
            while builder.advance().is_some() {}
            black_box(builder.path().len())
        })
    });
}

fn bench_full_draw_2k(c: &mut Criterion) {
    let series = Series::new("bench", sawtooth_points(2_000));

    c.bench_function("full_draw_2k", |b| {
        b.iter(|| {
            let mut chart = LineChart::new(
                RecordingSurface::new(),
                LineChartConfig::default(),
                scale_for(1),
            )
            .expect("chart init");
            chart.set_series(vec![black_box(series.clone())]);
            chart.draw().expect("draw should succeed");
            black_box(chart.surface().commands().len())
        })
    });
}

criterion_group!(
    benches,
    bench_path_build_10k,
    bench_step_path_build_10k,
    bench_full_draw_2k
);
criterion_main!(benches);
