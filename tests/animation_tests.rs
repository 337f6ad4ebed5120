use plotline_rs::api::{LineChart, LineChartConfig, TooltipConfig};
use plotline_rs::core::{Padding, ScaleContext, Series, SeriesOptions};
use plotline_rs::render::{Color, Easing, RecordingSurface, SurfaceCommand};

fn scale_for(series_count: usize) -> ScaleContext {
    ScaleContext {
        x_tick: 50.0,
        y_ticks: vec![1.0; series_count],
        min_vals: vec![0.0; series_count],
        padding: Padding::default(),
        canvas_height: 300.0,
        show_every: 1,
    }
}

fn animated_config() -> LineChartConfig {
    LineChartConfig {
        animation: true,
        animation_duration_ms: 900.0,
        tooltip: TooltipConfig {
            show: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn animated_chart(series: Vec<Series>) -> LineChart<RecordingSurface> {
    let scale = scale_for(series.len());
    let mut chart =
        LineChart::new(RecordingSurface::new(), animated_config(), scale).expect("chart init");
    chart.set_series(series);
    chart
}

/// Plays the host role: delivers completions until nothing is in flight.
fn pump(chart: &mut LineChart<RecordingSurface>) -> usize {
    let mut delivered = 0;
    while let Some(token) = chart.surface_mut().take_next_pending() {
        chart.on_animation_complete(token).expect("completion");
        delivered += 1;
    }
    delivered
}

#[test]
fn timed_reveal_issues_one_segment_at_a_time() {
    let series = Series::from_values("a", &[Some(1.0), Some(2.0), Some(3.0)]);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");

    // Only the first step is in flight; segment N+1 must wait for N.
    assert_eq!(chart.surface().pending_animations(), 1);
    assert!(chart.is_animating());

    let token = chart.surface_mut().take_next_pending().expect("step 0");
    assert_eq!(token.step, 0);
    chart.on_animation_complete(token).expect("completion");
    assert_eq!(chart.surface().pending_animations(), 1);

    pump(&mut chart);
    assert!(!chart.is_animating());
    assert_eq!(chart.snapshot().series["a"].path.matches("L ").count(), 2);
}

#[test]
fn per_segment_duration_divides_base_duration() {
    let series = Series::from_values("a", &[Some(1.0), Some(2.0), Some(3.0)]);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");
    pump(&mut chart);

    for command in chart.surface().commands() {
        if let SurfaceCommand::AnimatePath { duration_ms, .. } = command {
            assert!((duration_ms - 300.0).abs() <= 1e-9);
        }
    }
}

#[test]
fn completions_reveal_segments_in_index_order() {
    let series = Series::from_values("a", &[Some(1.0), None, Some(3.0), Some(4.0)]);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");

    let mut steps = Vec::new();
    while let Some(token) = chart.surface_mut().take_next_pending() {
        steps.push(token.step);
        chart.on_animation_complete(token).expect("completion");
    }
    // Every index gets its slice, null included, strictly left to right.
    assert_eq!(steps, vec![0, 1, 2, 3]);
}

#[test]
fn timed_and_immediate_paths_are_identical() {
    let values = &[Some(1.0), None, Some(3.0), Some(2.5)];

    let mut animated = animated_chart(vec![Series::from_values("a", values)]);
    animated.draw().expect("draw");
    pump(&mut animated);

    let mut config = animated_config();
    config.animation = false;
    let mut immediate =
        LineChart::new(RecordingSurface::new(), config, scale_for(1)).expect("chart init");
    immediate.set_series(vec![Series::from_values("a", values)]);
    immediate.draw().expect("draw");

    assert_eq!(
        animated.snapshot().series["a"].path,
        immediate.snapshot().series["a"].path
    );
}

#[test]
fn overlays_wait_for_their_segment_to_complete() {
    let options = SeriesOptions::default().with_show_points(true);
    let series = Series::from_values("a", &[Some(1.0), Some(2.0)]).with_options(options);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");

    let circles_before = chart
        .surface()
        .commands()
        .iter()
        .filter(|command| matches!(command, SurfaceCommand::CreateCircle { .. }))
        .count();
    assert_eq!(circles_before, 0);

    pump(&mut chart);
    let circles_after = chart
        .surface()
        .commands()
        .iter()
        .filter(|command| matches!(command, SurfaceCommand::CreateCircle { .. }))
        .count();
    assert_eq!(circles_after, 2);
}

#[test]
fn animated_stroked_markers_grow_from_zero() {
    let options = SeriesOptions::default()
        .with_show_points(true)
        .with_animate_points(true)
        .with_point_stroke(Color::rgb(0.0, 0.0, 0.0));
    let series = Series::from_values("a", &[Some(1.0)]).with_options(options);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");
    pump(&mut chart);

    let mut created_zero = false;
    let mut grew = false;
    for command in chart.surface().commands() {
        match command {
            SurfaceCommand::CreateCircle { spec, .. } if spec.stroke.is_some() => {
                created_zero = spec.radius == 0.0;
            }
            SurfaceCommand::AnimateRadius { to, easing, .. } => {
                grew = *to > 0.0 && *easing == Easing::Bounce;
            }
            _ => {}
        }
    }
    assert!(created_zero);
    assert!(grew);
}

#[test]
fn fills_animate_from_degenerate_quads() {
    let options = SeriesOptions::default().with_fill_lines(true);
    let series = Series::from_values("a", &[Some(1.0), Some(2.0)]).with_options(options);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");
    pump(&mut chart);

    let mut created_flat = false;
    let mut animated_out = false;
    for command in chart.surface().commands() {
        match command {
            SurfaceCommand::CreatePolygon { spec, .. } => {
                let baseline = spec.points[0].y;
                created_flat = spec.points.iter().all(|p| (p.y - baseline).abs() <= 1e-9);
            }
            SurfaceCommand::AnimatePolygon { to, .. } => {
                animated_out = to.iter().any(|p| (p.y - to[0].y).abs() > 1e-9);
            }
            _ => {}
        }
    }
    assert!(created_flat);
    assert!(animated_out);
}

#[test]
fn series_animate_concurrently_but_stay_internally_sequential() {
    let mut chart = animated_chart(vec![
        Series::from_values("a", &[Some(1.0), Some(2.0)]),
        Series::from_values("b", &[Some(3.0), Some(4.0)]),
    ]);
    chart.draw().expect("draw");

    // One in-flight segment per series.
    assert_eq!(chart.surface().pending_animations(), 2);

    let delivered = pump(&mut chart);
    assert_eq!(delivered, 4);
    assert!(!chart.is_animating());
}

#[test]
fn stale_completion_after_teardown_is_a_no_op() {
    let series = Series::from_values("a", &[Some(1.0), Some(2.0)]);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("draw");

    let token = chart.surface_mut().take_next_pending().expect("step 0");
    chart.teardown();
    let commands_before = chart.surface().commands().len();

    chart.on_animation_complete(token).expect("stale completion");
    assert_eq!(chart.surface().commands().len(), commands_before);
    assert!(!chart.is_animating());
}

#[test]
fn redraw_invalidates_prior_generation_tokens() {
    let series = Series::from_values("a", &[Some(1.0), Some(2.0)]);
    let mut chart = animated_chart(vec![series]);
    chart.draw().expect("first draw");
    let stale = chart.surface_mut().take_next_pending().expect("step 0");

    chart.draw().expect("second draw");
    // The redraw issued its own step-0 animation.
    assert_eq!(chart.surface().pending_animations(), 1);
    let commands_before = chart.surface().commands().len();

    chart.on_animation_complete(stale).expect("stale completion");
    assert_eq!(chart.surface().commands().len(), commands_before);
    assert!(chart.is_animating());

    pump(&mut chart);
    assert!(!chart.is_animating());
}
