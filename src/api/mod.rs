mod overlay;
mod sequencer;
mod snapshot;

pub use snapshot::{ChartSnapshot, SeriesSnapshot};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{LinePath, PathBuilder, ScaleContext, Series, resolve_point_radius};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    HoverController, HoverStyle, RoundedValueFormatter, TooltipFormatter, TooltipPlacement,
};
use crate::render::{AnimationToken, Color, PathSpec, ShapeId, Surface};

use sequencer::{DrawContext, RevealMode, SeriesSequencer};

/// Series colors used when the host supplies no palette of its own.
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::rgb(0.91, 0.31, 0.22),
    Color::rgb(0.22, 0.56, 0.89),
    Color::rgb(0.18, 0.70, 0.42),
    Color::rgb(0.94, 0.68, 0.12),
    Color::rgb(0.56, 0.35, 0.79),
];

/// Tooltip behavior and sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub show: bool,
    /// Configured width; the tooltip widens past this when content demands it.
    pub width_px: f64,
    /// Gap between the topmost point and the tooltip's bottom edge.
    pub flag_offset_px: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show: true,
            width_px: 100.0,
            flag_offset_px: 8.0,
        }
    }
}

/// Chart-wide rendering configuration.
///
/// Serializable so hosts can persist/load chart setup without inventing their
/// own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    /// Maximum marker radius; the effective radius also never exceeds what
    /// fits in one column.
    pub point_radius: f64,
    pub point_stroke_width: f64,
    /// Line stroke width, doubling as the simple-dot marker size.
    pub line_width: f64,
    pub fill_opacity: f64,
    pub highlight_radius: f64,
    pub highlight_opacity: f64,
    pub highlight_stroke_width: f64,
    /// Global switch between immediate and timed reveal.
    pub animation: bool,
    /// Base duration of a full-series reveal; each segment takes
    /// `animation_duration_ms / series_len`.
    pub animation_duration_ms: f64,
    /// Vertical region reserved at the canvas top, excluded from hit regions.
    pub reserved_top_px: f64,
    pub label_line_height_px: f64,
    pub label_font_size_px: f64,
    pub tooltip: TooltipConfig,
    pub palette: Vec<Color>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            point_radius: 4.0,
            point_stroke_width: 2.0,
            line_width: 2.0,
            fill_opacity: 0.2,
            highlight_radius: 5.0,
            highlight_opacity: 1.0,
            highlight_stroke_width: 2.0,
            animation: false,
            animation_duration_ms: 1000.0,
            reserved_top_px: 0.0,
            label_line_height_px: 12.0,
            label_font_size_px: 10.0,
            tooltip: TooltipConfig::default(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl LineChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("line_width", self.line_width),
            ("animation_duration_ms", self.animation_duration_ms),
            ("label_line_height_px", self.label_line_height_px),
            ("label_font_size_px", self.label_font_size_px),
            ("tooltip.width_px", self.tooltip.width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("point_radius", self.point_radius),
            ("point_stroke_width", self.point_stroke_width),
            ("highlight_radius", self.highlight_radius),
            ("highlight_stroke_width", self.highlight_stroke_width),
            ("reserved_top_px", self.reserved_top_px),
            ("tooltip.flag_offset_px", self.tooltip.flag_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("fill_opacity", self.fill_opacity),
            ("highlight_opacity", self.highlight_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be in [0, 1], got {value}"
                )));
            }
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        Ok(())
    }

    fn color_for(&self, series_index: usize) -> Color {
        self.palette[series_index % self.palette.len()]
    }
}

/// The chart engine: owns the surface and every piece of per-draw state.
///
/// `draw` is the sole render entry point. Hosts deliver animation completions
/// and pointer events back through the `on_*`/`pointer_*` methods.
pub struct LineChart<S: Surface> {
    surface: S,
    config: LineChartConfig,
    scale: ScaleContext,
    series: Vec<Series>,
    formatter: Box<dyn TooltipFormatter>,
    generation: u64,
    resolved_radius: f64,
    sequencers: Vec<SeriesSequencer>,
    hover: Option<HoverController>,
    click_targets: HashMap<ShapeId, String>,
    tooltip: Option<TooltipPlacement>,
}

impl<S: Surface> LineChart<S> {
    pub fn new(surface: S, config: LineChartConfig, scale: ScaleContext) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            surface,
            config,
            scale,
            series: Vec::new(),
            formatter: Box::new(RoundedValueFormatter::default()),
            generation: 0,
            resolved_radius: 0.0,
            sequencers: Vec::new(),
            hover: None,
            click_targets: HashMap::new(),
            tooltip: None,
        })
    }

    pub fn set_series(&mut self, series: Vec<Series>) {
        debug!(count = series.len(), "set series");
        self.series = series;
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn TooltipFormatter>) {
        self.formatter = formatter;
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn scale(&self) -> &ScaleContext {
        &self.scale
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Marker radius resolved by the last `draw`.
    #[must_use]
    pub fn resolved_point_radius(&self) -> f64 {
        self.resolved_radius
    }

    /// Whether any series still has timed segments in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.sequencers.iter().any(|seq| !seq.is_done())
    }

    /// Renders the whole chart.
    ///
    /// Configuration is checked before any geometry is produced; with
    /// animation off the call commits everything synchronously, otherwise
    /// each series starts its timed reveal and finishes through
    /// `on_animation_complete`.
    pub fn draw(&mut self) -> ChartResult<()> {
        self.config.validate()?;
        let expected = self.series.first().map_or(0, Series::len);
        for (index, series) in self.series.iter().enumerate() {
            if series.len() != expected {
                return Err(ChartError::MismatchedSeriesLength {
                    series: index,
                    expected,
                    actual: series.len(),
                });
            }
        }
        self.scale.validate(self.series.len())?;

        self.generation += 1;
        self.sequencers.clear();
        self.hover = None;
        self.tooltip = None;
        self.click_targets.clear();

        debug!(
            series_count = self.series.len(),
            points = expected,
            animation = self.config.animation,
            "chart draw"
        );

        self.resolved_radius = resolve_point_radius(
            self.scale.x_tick,
            self.config.point_stroke_width,
            self.config.point_radius,
        );

        for (index, series) in self.series.iter().enumerate() {
            let color = self.config.color_for(index);
            let path_shape = self.surface.create_path(PathSpec::new(
                LinePath::new(),
                self.config.line_width,
                color,
            ))?;
            let mode = if self.config.animation && expected > 0 {
                RevealMode::Timed {
                    per_segment_ms: self.config.animation_duration_ms / expected as f64,
                }
            } else {
                RevealMode::Immediate
            };
            let builder = PathBuilder::new(
                index,
                series.points.clone(),
                series.options.interpolation,
                series.options.fill_lines,
                self.scale.clone(),
            );
            self.sequencers.push(SeriesSequencer::new(
                index,
                builder,
                series.options.clone(),
                color,
                path_shape,
                mode,
                self.generation,
            ));
        }

        let ctx = DrawContext {
            config: &self.config,
            scale: &self.scale,
            resolved_radius: self.resolved_radius,
        };
        for seq in self.sequencers.iter_mut() {
            seq.begin(&mut self.surface, &ctx, &mut self.click_targets)?;
        }

        if self.config.tooltip.show {
            let colors: Vec<Color> = (0..self.series.len())
                .map(|index| self.config.color_for(index))
                .collect();
            let style = HoverStyle {
                highlight_radius: self.config.highlight_radius,
                highlight_opacity: self.config.highlight_opacity,
                highlight_stroke_width: self.config.highlight_stroke_width,
                reserved_top_px: self.config.reserved_top_px,
                tooltip_width_px: self.config.tooltip.width_px,
                flag_offset_px: self.config.tooltip.flag_offset_px,
            };
            self.hover = Some(HoverController::build(
                &mut self.surface,
                &self.series,
                &colors,
                &self.scale,
                style,
            )?);
        }

        Ok(())
    }

    /// Host callback for a finished path animation.
    ///
    /// Tokens from a previous draw generation are silent no-ops, which is the
    /// stale-callback guard for torn-down or redrawn charts.
    pub fn on_animation_complete(&mut self, token: AnimationToken) -> ChartResult<()> {
        if token.generation != self.generation {
            trace!(
                token_generation = token.generation,
                current = self.generation,
                "ignoring stale animation completion"
            );
            return Ok(());
        }
        if token.series >= self.sequencers.len() {
            return Ok(());
        }
        let ctx = DrawContext {
            config: &self.config,
            scale: &self.scale,
            resolved_radius: self.resolved_radius,
        };
        let seq = &mut self.sequencers[token.series];
        seq.on_complete(&mut self.surface, &ctx, &mut self.click_targets, token)
    }

    /// Pointer entered a hover hit rectangle; non-hover shapes are ignored.
    pub fn pointer_enter(&mut self, shape: ShapeId) {
        let Some(hover) = self.hover.as_mut() else {
            return;
        };
        if let Some(placement) = hover.activate(&mut self.surface, shape, self.formatter.as_ref())
        {
            self.tooltip = Some(placement);
        }
    }

    /// Pointer left the chart area: all highlights clear, tooltip hides.
    pub fn pointer_leave(&mut self) {
        if let Some(hover) = self.hover.as_mut() {
            hover.clear(&mut self.surface);
        }
        self.tooltip = None;
    }

    /// Navigation target of a clicked marker, if that point carries one.
    #[must_use]
    pub fn click(&self, shape: ShapeId) -> Option<&str> {
        self.click_targets.get(&shape).map(String::as_str)
    }

    #[must_use]
    pub fn active_tooltip(&self) -> Option<&TooltipPlacement> {
        self.tooltip.as_ref()
    }

    /// Currently visible hover index, if any.
    #[must_use]
    pub fn active_hover_index(&self) -> Option<usize> {
        self.hover.as_ref().and_then(HoverController::active_index)
    }

    /// Committed geometry of the current draw.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let mut snapshot = ChartSnapshot::default();
        for seq in &self.sequencers {
            let name = self.series[seq.series_index()].name.clone();
            snapshot.series.insert(
                name,
                SeriesSnapshot {
                    path: seq.path().to_string(),
                    marker_count: seq.marker_count(),
                    label_count: seq.label_count(),
                },
            );
        }
        snapshot.hover_region_count = self
            .hover
            .as_ref()
            .map_or(0, HoverController::region_count);
        snapshot
    }

    /// Invalidates all per-draw state. Animation completions issued before
    /// teardown become no-ops.
    pub fn teardown(&mut self) {
        debug!("chart teardown");
        self.generation += 1;
        self.sequencers.clear();
        self.hover = None;
        self.tooltip = None;
        self.click_targets.clear();
    }
}
