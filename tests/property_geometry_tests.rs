use plotline_rs::core::{
    Interpolation, Padding, PathBuilder, Point, ScaleContext, resolve_point_radius,
};
use proptest::prelude::*;

fn scale() -> ScaleContext {
    ScaleContext {
        x_tick: 40.0,
        y_ticks: vec![2.0],
        min_vals: vec![-1_000.0],
        padding: Padding::new(5.0, 2.0, 8.0),
        canvas_height: 500.0,
        show_every: 1,
    }
}

fn build(values: &[Option<f64>], interpolation: Interpolation) -> PathBuilder {
    let points = values
        .iter()
        .map(|value| Point {
            value: *value,
            click_target: None,
        })
        .collect();
    let mut builder = PathBuilder::new(0, points, interpolation, false, scale());
    while builder.advance().is_some() {}
    builder
}

proptest! {
    #[test]
    fn resolved_radius_stays_in_range(
        x_tick in 0.5f64..500.0,
        stroke in 0.0f64..20.0,
        desired in 0.0f64..50.0
    ) {
        let resolved = resolve_point_radius(x_tick, stroke, desired);
        prop_assert!(resolved >= 0.0);
        prop_assert!(resolved <= desired);

        // When the column is the binding constraint, the one-pixel gap holds.
        let raw = (x_tick - 1.0 - stroke) / 2.0;
        if (0.0..=desired).contains(&raw) {
            prop_assert!(2.0 * resolved + stroke <= x_tick - 1.0 + 1e-9);
        }
    }

    #[test]
    fn gapless_series_has_one_move_and_n_minus_one_draws(
        values in proptest::collection::vec(-500.0f64..500.0, 1..64),
        bridge in any::<bool>()
    ) {
        let interpolation = if bridge {
            Interpolation::InterpolateNulls
        } else {
            Interpolation::None
        };
        let wrapped: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        let builder = build(&wrapped, interpolation);
        let segments = builder.path().segments();

        prop_assert_eq!(segments.len(), values.len());
        prop_assert!(segments[0].is_move());
        for segment in &segments[1..] {
            prop_assert!(!segment.is_move());
        }
    }

    #[test]
    fn gapless_step_series_has_one_move_and_step_pairs(
        values in proptest::collection::vec(-500.0f64..500.0, 1..64)
    ) {
        let wrapped: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        let builder = build(&wrapped, Interpolation::Step);
        let segments = builder.path().segments();

        prop_assert_eq!(segments.len(), 1 + 2 * (values.len() - 1));
        prop_assert!(segments[0].is_move());
        for segment in &segments[1..] {
            prop_assert!(!segment.is_move());
        }
    }

    #[test]
    fn segment_after_a_gap_depends_on_interpolation(
        before in -500.0f64..500.0,
        after in -500.0f64..500.0,
        gap_len in 1usize..4
    ) {
        let mut values = vec![Some(before)];
        values.extend(std::iter::repeat_n(None, gap_len));
        values.push(Some(after));

        let restarted = build(&values, Interpolation::None);
        let segments = restarted.path().segments();
        prop_assert_eq!(segments.len(), 2);
        prop_assert!(segments[1].is_move());

        let bridged = build(&values, Interpolation::InterpolateNulls);
        let segments = bridged.path().segments();
        prop_assert_eq!(segments.len(), 2);
        prop_assert!(!segments[1].is_move());
    }

    #[test]
    fn mapper_is_pure(
        index in 0usize..10_000,
        value in -10_000.0f64..10_000.0
    ) {
        let scale = scale();
        let first = scale.map_point(0, index, value);
        let second = scale.map_point(0, index, value);
        prop_assert_eq!(first, second);
        prop_assert!(first.x.is_finite());
        prop_assert!(first.y.is_finite());
    }
}
