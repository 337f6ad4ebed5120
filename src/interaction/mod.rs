use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{PixelPoint, ScaleContext, Series};
use crate::error::ChartResult;
use crate::render::{CircleSpec, Color, RectSpec, ShapeId, Surface};

/// One series' value at a hovered x-index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub series: usize,
    pub value: f64,
}

/// Formatter output: renderable text plus its natural width so the tooltip
/// can widen past its configured width when the content demands it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub text: String,
    pub natural_width_px: f64,
}

/// Host-supplied tooltip content formatter.
pub trait TooltipFormatter {
    fn format(&self, index: usize, values: &[SeriesValue]) -> TooltipContent;
}

/// Default formatter: rounded values joined with a separator, width estimated
/// from character count.
#[derive(Debug, Clone)]
pub struct RoundedValueFormatter {
    pub unit: Option<String>,
    pub char_width_px: f64,
}

impl Default for RoundedValueFormatter {
    fn default() -> Self {
        Self {
            unit: None,
            char_width_px: 7.0,
        }
    }
}

impl TooltipFormatter for RoundedValueFormatter {
    fn format(&self, _index: usize, values: &[SeriesValue]) -> TooltipContent {
        let unit = self.unit.as_deref().unwrap_or("");
        let text = values
            .iter()
            .map(|entry| format!("{}{unit}", entry.value.round()))
            .collect::<Vec<_>>()
            .join(" / ");
        let natural_width_px = text.chars().count() as f64 * self.char_width_px;
        TooltipContent {
            text,
            natural_width_px,
        }
    }
}

/// Resolved tooltip geometry for the active hover index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    /// Horizontal center of the tooltip, at the hovered column.
    pub x: f64,
    /// Bottom anchor, above the topmost point of the column.
    pub y: f64,
    pub width_px: f64,
    pub content: TooltipContent,
}

/// Visual constants the hover layer needs from the chart config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverStyle {
    pub highlight_radius: f64,
    pub highlight_opacity: f64,
    pub highlight_stroke_width: f64,
    /// Vertical region reserved at the canvas top (error bars etc.), excluded
    /// from hit rectangles.
    pub reserved_top_px: f64,
    pub tooltip_width_px: f64,
    /// Gap between the topmost point and the tooltip's bottom edge.
    pub flag_offset_px: f64,
}

#[derive(Debug, Clone)]
struct HoverRegion {
    index: usize,
    hit: ShapeId,
    highlights: Vec<ShapeId>,
    anchor: PixelPoint,
    values: Vec<SeriesValue>,
}

/// Builds and owns the per-index hover machinery: one invisible hit rectangle
/// spanning all series, one hidden highlight marker per non-null value.
///
/// The active highlight set is exclusively owned state; at most one set is
/// visible at any time across the whole chart.
#[derive(Debug)]
pub struct HoverController {
    style: HoverStyle,
    regions: Vec<HoverRegion>,
    active: Option<usize>,
}

impl HoverController {
    /// Creates hit rectangles and highlight markers for every x-index that has
    /// at least one non-null value. Built once per chart draw, independent of
    /// animation.
    pub fn build<S: Surface>(
        surface: &mut S,
        series: &[Series],
        colors: &[Color],
        scale: &ScaleContext,
        style: HoverStyle,
    ) -> ChartResult<Self> {
        let len = series.first().map_or(0, Series::len);
        let mut regions = Vec::new();

        for index in 0..len {
            let mut values = Vec::new();
            for (s, one) in series.iter().enumerate() {
                if let Some(value) = one.points[index].numeric() {
                    values.push(SeriesValue { series: s, value });
                }
            }
            if values.is_empty() {
                continue;
            }

            let top = values
                .iter()
                .max_by_key(|entry| OrderedFloat(entry.value))
                .copied()
                .unwrap_or(values[0]);
            // Keep the tooltip anchor at or above the owning series' baseline
            // even when every value is negative.
            let top_value = top.value.max(scale.min_vals[top.series]);
            let anchor = scale.map_point(top.series, index, top_value);

            let hit_x = index as f64 * scale.x_tick + scale.padding.left;
            let hit = surface.create_rect(
                RectSpec::new(
                    hit_x,
                    style.reserved_top_px,
                    scale.x_tick,
                    (scale.canvas_height - style.reserved_top_px).max(0.0),
                )
                .with_opacity(0.0),
            )?;

            let mut highlights = Vec::with_capacity(values.len());
            for entry in &values {
                let pixel = scale.map_point(entry.series, index, entry.value);
                let color = colors[entry.series % colors.len()];
                let highlight = surface.create_circle(
                    CircleSpec::new(pixel.x, pixel.y, style.highlight_radius)
                        .with_stroke(color, style.highlight_stroke_width)
                        .with_opacity(1.0),
                )?;
                highlights.push(highlight);
            }
            surface.set_group_opacity(&highlights, 0.0);
            surface.to_front(hit);

            regions.push(HoverRegion {
                index,
                hit,
                highlights,
                anchor,
                values,
            });
        }

        Ok(Self {
            style,
            regions,
            active: None,
        })
    }

    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Index of the region whose highlights are currently visible.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|pos| self.regions[pos].index)
    }

    /// Activates the region owning `hit`, deactivating any previous one, and
    /// returns the tooltip placement for it. Unknown shapes return `None`.
    pub fn activate<S: Surface>(
        &mut self,
        surface: &mut S,
        hit: ShapeId,
        formatter: &dyn TooltipFormatter,
    ) -> Option<TooltipPlacement> {
        let pos = self.regions.iter().position(|region| region.hit == hit)?;

        if let Some(previous) = self.active {
            if previous != pos {
                surface.set_group_opacity(&self.regions[previous].highlights, 0.0);
            }
        }
        let region = &self.regions[pos];
        surface.set_group_opacity(&region.highlights, self.style.highlight_opacity);
        self.active = Some(pos);
        trace!(index = region.index, "hover activate");

        let content = formatter.format(region.index, &region.values);
        let width_px = self.style.tooltip_width_px.max(content.natural_width_px);
        let y = region.anchor.y
            - self.style.highlight_radius
            - self.style.highlight_stroke_width / 2.0
            - self.style.flag_offset_px;

        Some(TooltipPlacement {
            x: region.anchor.x,
            y,
            width_px,
            content,
        })
    }

    /// Hides the active highlight set, if any (pointer left the chart area).
    pub fn clear<S: Surface>(&mut self, surface: &mut S) {
        if let Some(pos) = self.active.take() {
            surface.set_group_opacity(&self.regions[pos].highlights, 0.0);
        }
    }
}
