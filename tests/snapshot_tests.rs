use plotline_rs::api::{ChartSnapshot, LineChart, LineChartConfig};
use plotline_rs::core::{Interpolation, Padding, ScaleContext, Series, SeriesOptions};
use plotline_rs::render::RecordingSurface;

fn scale_for(series_count: usize) -> ScaleContext {
    ScaleContext {
        x_tick: 80.0,
        y_ticks: vec![1.5; series_count],
        min_vals: vec![0.0; series_count],
        padding: Padding::new(10.0, 4.0, 16.0),
        canvas_height: 320.0,
        show_every: 1,
    }
}

fn drawn_chart() -> LineChart<RecordingSurface> {
    let series = vec![
        Series::from_values("latency", &[Some(12.0), None, Some(30.0), Some(18.0)]),
        Series::from_values("errors", &[Some(20.0), Some(30.0), Some(10.0), Some(40.0)]).with_options(
            SeriesOptions::default()
                .with_interpolation(Interpolation::Step)
                .with_show_points(true)
                .with_label_points(true),
        ),
    ];
    let mut chart = LineChart::new(
        RecordingSurface::new(),
        LineChartConfig::default(),
        scale_for(2),
    )
    .expect("chart init");
    chart.set_series(series);
    chart.draw().expect("draw");
    chart
}

#[test]
fn identical_draws_produce_identical_json() {
    let first = drawn_chart().snapshot().to_json().expect("json");
    let second = drawn_chart().snapshot().to_json().expect("json");
    assert_eq!(first, second);
}

#[test]
fn snapshot_preserves_series_insertion_order() {
    let snapshot = drawn_chart().snapshot();
    let names: Vec<_> = snapshot.series.keys().cloned().collect();
    assert_eq!(names, vec!["latency".to_string(), "errors".to_string()]);
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = drawn_chart().snapshot();
    let json = snapshot.to_json().expect("json");
    let parsed = ChartSnapshot::from_json(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_counts_markers_and_labels() {
    let snapshot = drawn_chart().snapshot();

    let latency = &snapshot.series["latency"];
    assert_eq!(latency.marker_count, 0);
    assert_eq!(latency.label_count, 0);

    // Four non-null values, all on visible rows.
    let errors = &snapshot.series["errors"];
    assert_eq!(errors.marker_count, 4);
    assert_eq!(errors.label_count, 4);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ChartSnapshot::from_json("{ not json").expect_err("parse failure");
    assert!(err.to_string().contains("snapshot parse failed"));
}
