use plotline_rs::ChartError;
use plotline_rs::core::{LinePath, PathSegment, PixelPoint};
use plotline_rs::render::{
    CircleSpec, Color, PathSpec, PolygonSpec, RecordingSurface, RectSpec, ShapeId, Surface,
    TextHAlign, TextSpec,
};

const INK: Color = Color::rgb(0.1, 0.1, 0.1);

#[test]
fn non_finite_circle_center_is_rejected() {
    let mut surface = RecordingSurface::new();
    let err = surface
        .create_circle(CircleSpec::new(f64::NAN, 10.0, 3.0).with_fill(INK))
        .expect_err("NaN center");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.commands().is_empty());
}

#[test]
fn negative_circle_radius_is_rejected() {
    let mut surface = RecordingSurface::new();
    let err = surface
        .create_circle(CircleSpec::new(10.0, 10.0, -1.0))
        .expect_err("negative radius");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn out_of_range_color_channels_are_rejected() {
    let mut surface = RecordingSurface::new();
    let err = surface
        .create_circle(CircleSpec::new(10.0, 10.0, 3.0).with_fill(INK.with_alpha(1.4)))
        .expect_err("alpha above 1");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn negative_rect_extent_is_rejected() {
    let mut surface = RecordingSurface::new();
    let err = surface
        .create_rect(RectSpec::new(0.0, 0.0, -5.0, 10.0))
        .expect_err("negative width");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn non_finite_polygon_vertex_is_rejected() {
    let mut surface = RecordingSurface::new();
    let points = vec![
        PixelPoint::new(0.0, 0.0),
        PixelPoint::new(10.0, f64::INFINITY),
        PixelPoint::new(20.0, 0.0),
    ];
    let err = surface
        .create_polygon(PolygonSpec::new(points, INK, 0.5))
        .expect_err("infinite vertex");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn non_finite_path_segment_is_rejected() {
    let mut surface = RecordingSurface::new();
    let mut path = LinePath::new();
    path.push(PathSegment::MoveTo { x: 0.0, y: f64::NAN });
    let err = surface
        .create_path(PathSpec::new(path, 2.0, INK))
        .expect_err("NaN segment");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = surface
        .create_path(PathSpec::new(LinePath::new(), 0.0, INK))
        .expect_err("zero stroke width");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_text_is_rejected() {
    let mut surface = RecordingSurface::new();
    let err = surface
        .create_text(TextSpec::new("", 10.0, 10.0, 10.0, INK, TextHAlign::Left))
        .expect_err("empty text");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn rejected_specs_allocate_no_shape_ids() {
    let mut surface = RecordingSurface::new();
    surface
        .create_rect(RectSpec::new(0.0, 0.0, f64::NAN, 10.0))
        .expect_err("NaN width");

    // The first accepted shape still takes the first id.
    let id = surface
        .create_text(TextSpec::new(
            "42",
            10.0,
            10.0,
            10.0,
            INK,
            TextHAlign::Right,
        ))
        .expect("valid text");
    assert_eq!(id, ShapeId(0));
    assert_eq!(surface.shape_count(), 1);
    assert_eq!(surface.commands().len(), 1);
}
