use crate::core::{PlottedPoint, ScaleContext, SeriesOptions};
use crate::error::ChartResult;
use crate::render::{CircleSpec, Color, Easing, ShapeId, Surface, TextHAlign, TextSpec};

use super::LineChartConfig;

/// Duration of the marker radius grow-in when `animate_points` is set.
const POINT_REVEAL_MS: f64 = 200.0;

/// Per-draw inputs shared by every overlay call of one series.
#[derive(Debug, Clone, Copy)]
pub(super) struct OverlayStyle<'a> {
    pub config: &'a LineChartConfig,
    pub scale: &'a ScaleContext,
    /// Resolved once per draw and reused so markers and label offsets agree.
    pub resolved_radius: f64,
    pub color: Color,
    pub animate: bool,
}

/// Shapes created for one plotted point.
#[derive(Debug, Clone, Default)]
pub(super) struct OverlayOutcome {
    pub marker: Option<ShapeId>,
    pub label: Option<ShapeId>,
    pub click_target: Option<(ShapeId, String)>,
}

/// Renders the marker and label for one committed non-null point, each
/// independently gated by the series options.
pub(super) fn render_point_overlay<S: Surface>(
    surface: &mut S,
    style: &OverlayStyle<'_>,
    options: &SeriesOptions,
    point: &PlottedPoint,
) -> ChartResult<OverlayOutcome> {
    let mut outcome = OverlayOutcome::default();

    if options.show_points {
        let marker = match options.point_stroke {
            Some(stroke) => {
                let grow_in = options.animate_points && style.animate;
                let start_radius = if grow_in { 0.0 } else { style.resolved_radius };
                let mut spec = CircleSpec::new(point.pixel.x, point.pixel.y, start_radius)
                    .with_stroke(stroke, style.config.point_stroke_width);
                if options.fill_points {
                    spec = spec.with_fill(style.color);
                }
                let id = surface.create_circle(spec)?;
                if grow_in {
                    surface.animate_radius(
                        id,
                        style.resolved_radius,
                        POINT_REVEAL_MS,
                        Easing::Bounce,
                    );
                }
                id
            }
            // Simple solid dot sized by the line-width constant; the resolved
            // radius does not apply here.
            None => surface.create_circle(
                CircleSpec::new(point.pixel.x, point.pixel.y, style.config.line_width)
                    .with_fill(style.color),
            )?,
        };
        if let Some(target) = &point.click_target {
            surface.set_cursor_affordance(marker, true);
            outcome.click_target = Some((marker, target.clone()));
        }
        outcome.marker = Some(marker);
    }

    if options.label_points {
        let label_y =
            point.pixel.y + style.resolved_radius + style.config.point_stroke_width / 2.0;
        let off_graph =
            label_y >= style.scale.canvas_height - style.config.label_line_height_px;
        let thinned = point.index % style.scale.show_every != 0;
        if !off_graph && !thinned {
            let unit = options.unit.as_deref().unwrap_or("");
            let text = format!("{}{unit}", point.value.round());
            let label = surface.create_text(TextSpec::new(
                text,
                point.pixel.x,
                label_y,
                style.config.label_font_size_px,
                style.color,
                TextHAlign::Center,
            ))?;
            outcome.label = Some(label);
        }
    }

    Ok(outcome)
}
