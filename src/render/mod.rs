mod primitives;
mod recording;

pub use primitives::{CircleSpec, Color, PathSpec, PolygonSpec, RectSpec, TextHAlign, TextSpec};
pub use recording::{RecordingSurface, SurfaceCommand};

use serde::{Deserialize, Serialize};

use crate::core::LinePath;
use crate::error::ChartResult;

/// Handle to a shape retained by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

/// Easing applied to a timed geometry animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Overshoot-and-settle, used for marker radius reveal.
    Bounce,
}

/// Identifies one awaited path animation.
///
/// The host echoes the token back through `LineChart::on_animation_complete`.
/// `generation` is the chart's draw generation at issue time; completions
/// carrying an older generation are ignored, which is how a torn-down or
/// redrawn chart shrugs off stale callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationToken {
    pub generation: u64,
    pub series: usize,
    pub step: usize,
}

/// Drawable-surface capability implemented by the host.
///
/// The engine is retained-mode: it creates shapes once and then commits or
/// animates their geometry. All calls are synchronous and single-threaded;
/// animation completion is delivered back by the host, never concurrently.
pub trait Surface {
    fn create_path(&mut self, spec: PathSpec) -> ChartResult<ShapeId>;
    fn create_circle(&mut self, spec: CircleSpec) -> ChartResult<ShapeId>;
    fn create_rect(&mut self, spec: RectSpec) -> ChartResult<ShapeId>;
    fn create_polygon(&mut self, spec: PolygonSpec) -> ChartResult<ShapeId>;
    fn create_text(&mut self, spec: TextSpec) -> ChartResult<ShapeId>;

    /// Commits a path shape's geometry in one update, without animation.
    fn set_path(&mut self, id: ShapeId, path: &LinePath);

    /// Animates a path shape from its current geometry to `to`. The host must
    /// deliver `token` back exactly once when the animation finishes.
    fn animate_path(
        &mut self,
        id: ShapeId,
        to: &LinePath,
        duration_ms: f64,
        easing: Easing,
        token: AnimationToken,
    );

    /// Animates a polygon's vertices; fire-and-forget.
    fn animate_polygon(&mut self, id: ShapeId, to: &[crate::core::PixelPoint], duration_ms: f64);

    /// Animates a circle's radius; fire-and-forget.
    fn animate_radius(&mut self, id: ShapeId, to: f64, duration_ms: f64, easing: Easing);

    /// Sets collective opacity over a group of shapes.
    fn set_group_opacity(&mut self, ids: &[ShapeId], opacity: f64);

    fn to_front(&mut self, id: ShapeId);

    /// Toggles the pointer cursor affordance for a clickable shape.
    fn set_cursor_affordance(&mut self, id: ShapeId, pointer: bool);
}
