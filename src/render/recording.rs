use std::collections::VecDeque;

use crate::core::{LinePath, PixelPoint};
use crate::error::ChartResult;
use crate::render::{
    AnimationToken, CircleSpec, Easing, PathSpec, PolygonSpec, RectSpec, ShapeId, Surface,
    TextSpec,
};

/// Everything a `RecordingSurface` was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    CreatePath { id: ShapeId, spec: PathSpec },
    CreateCircle { id: ShapeId, spec: CircleSpec },
    CreateRect { id: ShapeId, spec: RectSpec },
    CreatePolygon { id: ShapeId, spec: PolygonSpec },
    CreateText { id: ShapeId, spec: TextSpec },
    SetPath { id: ShapeId, path: LinePath },
    AnimatePath {
        id: ShapeId,
        to: LinePath,
        duration_ms: f64,
        easing: Easing,
        token: AnimationToken,
    },
    AnimatePolygon {
        id: ShapeId,
        to: Vec<PixelPoint>,
        duration_ms: f64,
    },
    AnimateRadius {
        id: ShapeId,
        to: f64,
        duration_ms: f64,
        easing: Easing,
    },
    SetGroupOpacity { ids: Vec<ShapeId>, opacity: f64 },
    ToFront { id: ShapeId },
    SetCursorAffordance { id: ShapeId, pointer: bool },
}

/// In-memory surface used by tests and headless hosts.
///
/// It validates every shape spec so invalid geometry is caught before a real
/// backend exists, records the full command stream, and queues path-animation
/// tokens so a test can play the host's completion role.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    commands: Vec<SurfaceCommand>,
    pending: VecDeque<AnimationToken>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    #[must_use]
    pub fn shape_count(&self) -> u64 {
        self.next_id
    }

    /// Queued path-animation completions in issue order.
    #[must_use]
    pub fn pending_animations(&self) -> usize {
        self.pending.len()
    }

    /// Pops the oldest pending animation token, if any.
    pub fn take_next_pending(&mut self) -> Option<AnimationToken> {
        self.pending.pop_front()
    }

    fn allocate(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Surface for RecordingSurface {
    fn create_path(&mut self, spec: PathSpec) -> ChartResult<ShapeId> {
        spec.validate()?;
        let id = self.allocate();
        self.commands.push(SurfaceCommand::CreatePath { id, spec });
        Ok(id)
    }

    fn create_circle(&mut self, spec: CircleSpec) -> ChartResult<ShapeId> {
        spec.validate()?;
        let id = self.allocate();
        self.commands.push(SurfaceCommand::CreateCircle { id, spec });
        Ok(id)
    }

    fn create_rect(&mut self, spec: RectSpec) -> ChartResult<ShapeId> {
        spec.validate()?;
        let id = self.allocate();
        self.commands.push(SurfaceCommand::CreateRect { id, spec });
        Ok(id)
    }

    fn create_polygon(&mut self, spec: PolygonSpec) -> ChartResult<ShapeId> {
        spec.validate()?;
        let id = self.allocate();
        self.commands.push(SurfaceCommand::CreatePolygon { id, spec });
        Ok(id)
    }

    fn create_text(&mut self, spec: TextSpec) -> ChartResult<ShapeId> {
        spec.validate()?;
        let id = self.allocate();
        self.commands.push(SurfaceCommand::CreateText { id, spec });
        Ok(id)
    }

    fn set_path(&mut self, id: ShapeId, path: &LinePath) {
        self.commands.push(SurfaceCommand::SetPath {
            id,
            path: path.clone(),
        });
    }

    fn animate_path(
        &mut self,
        id: ShapeId,
        to: &LinePath,
        duration_ms: f64,
        easing: Easing,
        token: AnimationToken,
    ) {
        self.pending.push_back(token);
        self.commands.push(SurfaceCommand::AnimatePath {
            id,
            to: to.clone(),
            duration_ms,
            easing,
            token,
        });
    }

    fn animate_polygon(&mut self, id: ShapeId, to: &[PixelPoint], duration_ms: f64) {
        self.commands.push(SurfaceCommand::AnimatePolygon {
            id,
            to: to.to_vec(),
            duration_ms,
        });
    }

    fn animate_radius(&mut self, id: ShapeId, to: f64, duration_ms: f64, easing: Easing) {
        self.commands.push(SurfaceCommand::AnimateRadius {
            id,
            to,
            duration_ms,
            easing,
        });
    }

    fn set_group_opacity(&mut self, ids: &[ShapeId], opacity: f64) {
        self.commands.push(SurfaceCommand::SetGroupOpacity {
            ids: ids.to_vec(),
            opacity,
        });
    }

    fn to_front(&mut self, id: ShapeId) {
        self.commands.push(SurfaceCommand::ToFront { id });
    }

    fn set_cursor_affordance(&mut self, id: ShapeId, pointer: bool) {
        self.commands.push(SurfaceCommand::SetCursorAffordance { id, pointer });
    }
}
