use std::collections::HashMap;

use tracing::trace;

use crate::core::{PathBuilder, ScaleContext, SeriesOptions, StepEvent};
use crate::error::ChartResult;
use crate::render::{AnimationToken, Color, Easing, PolygonSpec, ShapeId, Surface};

use super::overlay::{OverlayStyle, render_point_overlay};
use super::LineChartConfig;

/// How the path reveal is driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum RevealMode {
    /// Commit every segment synchronously in one draw call.
    Immediate,
    /// One timed path animation per point, strictly in index order.
    Timed { per_segment_ms: f64 },
}

/// Read-only chart state threaded through sequencer steps.
#[derive(Debug, Clone, Copy)]
pub(super) struct DrawContext<'a> {
    pub config: &'a LineChartConfig,
    pub scale: &'a ScaleContext,
    pub resolved_radius: f64,
}

/// Drives one series' `PathBuilder` to completion.
///
/// Immediate mode loops synchronously. Timed mode suspends after issuing each
/// path animation and resumes from `on_complete`, so segment N+1 never starts
/// before segment N finishes. The walk is independent of sibling series.
#[derive(Debug)]
pub(super) struct SeriesSequencer {
    series_index: usize,
    builder: PathBuilder,
    options: SeriesOptions,
    color: Color,
    path_shape: ShapeId,
    mode: RevealMode,
    generation: u64,
    pending: Option<StepEvent>,
    marker_count: usize,
    label_count: usize,
}

impl SeriesSequencer {
    #[must_use]
    pub fn new(
        series_index: usize,
        builder: PathBuilder,
        options: SeriesOptions,
        color: Color,
        path_shape: ShapeId,
        mode: RevealMode,
        generation: u64,
    ) -> Self {
        Self {
            series_index,
            builder,
            options,
            color,
            path_shape,
            mode,
            generation,
            pending: None,
            marker_count: 0,
            label_count: 0,
        }
    }

    #[must_use]
    pub fn series_index(&self) -> usize {
        self.series_index
    }

    #[must_use]
    pub fn path(&self) -> &crate::core::LinePath {
        self.builder.path()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    /// Whether every point has been committed to the surface.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.builder.is_done() && self.pending.is_none()
    }

    /// Starts the walk. An empty series finishes without touching the surface.
    pub fn begin<S: Surface>(
        &mut self,
        surface: &mut S,
        ctx: &DrawContext<'_>,
        click_targets: &mut HashMap<ShapeId, String>,
    ) -> ChartResult<()> {
        match self.mode {
            RevealMode::Immediate => {
                while let Some(event) = self.builder.advance() {
                    self.commit_immediate(surface, ctx, click_targets, event)?;
                }
                Ok(())
            }
            RevealMode::Timed { .. } => self.issue_next(surface, ctx),
        }
    }

    /// Resumes the walk after the host reports a path animation finished.
    /// A token for a step this sequencer is not waiting on is ignored.
    pub fn on_complete<S: Surface>(
        &mut self,
        surface: &mut S,
        ctx: &DrawContext<'_>,
        click_targets: &mut HashMap<ShapeId, String>,
        token: AnimationToken,
    ) -> ChartResult<()> {
        let Some(event) = self.pending.take() else {
            trace!(series = self.series_index, "completion with no pending step");
            return Ok(());
        };
        if event.index != token.step {
            self.pending = Some(event);
            return Ok(());
        }

        self.run_overlay(surface, ctx, click_targets, &event)?;
        self.issue_next(surface, ctx)
    }

    fn commit_immediate<S: Surface>(
        &mut self,
        surface: &mut S,
        ctx: &DrawContext<'_>,
        click_targets: &mut HashMap<ShapeId, String>,
        event: StepEvent,
    ) -> ChartResult<()> {
        if let Some(fill) = &event.fill {
            surface.create_polygon(PolygonSpec::new(
                fill.polygon(),
                self.color,
                ctx.config.fill_opacity,
            ))?;
        }
        surface.set_path(self.path_shape, self.builder.path());
        self.run_overlay(surface, ctx, click_targets, &event)
    }

    fn issue_next<S: Surface>(
        &mut self,
        surface: &mut S,
        ctx: &DrawContext<'_>,
    ) -> ChartResult<()> {
        let RevealMode::Timed { per_segment_ms } = self.mode else {
            return Ok(());
        };
        let Some(event) = self.builder.advance() else {
            trace!(series = self.series_index, "timed reveal finished");
            return Ok(());
        };

        if let Some(fill) = &event.fill {
            let shape = surface.create_polygon(PolygonSpec::new(
                fill.degenerate(),
                self.color,
                ctx.config.fill_opacity,
            ))?;
            surface.animate_polygon(shape, &fill.polygon(), per_segment_ms);
        }
        surface.animate_path(
            self.path_shape,
            self.builder.path(),
            per_segment_ms,
            Easing::Linear,
            AnimationToken {
                generation: self.generation,
                series: self.series_index,
                step: event.index,
            },
        );
        self.pending = Some(event);
        Ok(())
    }

    fn run_overlay<S: Surface>(
        &mut self,
        surface: &mut S,
        ctx: &DrawContext<'_>,
        click_targets: &mut HashMap<ShapeId, String>,
        event: &StepEvent,
    ) -> ChartResult<()> {
        let Some(point) = &event.point else {
            return Ok(());
        };
        let style = OverlayStyle {
            config: ctx.config,
            scale: ctx.scale,
            resolved_radius: ctx.resolved_radius,
            color: self.color,
            animate: matches!(self.mode, RevealMode::Timed { .. }),
        };
        let outcome = render_point_overlay(surface, &style, &self.options, point)?;
        if outcome.marker.is_some() {
            self.marker_count += 1;
        }
        if outcome.label.is_some() {
            self.label_count += 1;
        }
        if let Some((shape, target)) = outcome.click_target {
            click_targets.insert(shape, target);
        }
        Ok(())
    }
}
