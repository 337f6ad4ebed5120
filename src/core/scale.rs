use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// Pixel offsets reserved around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub fn new(left: f64, top: f64, bottom: f64) -> Self {
        Self { left, top, bottom }
    }
}

/// Precomputed scale factors supplied by the layout layer, read-only here.
///
/// `y_ticks[s]` is pixels per unit value for series `s`; `min_vals[s]` is the
/// value mapped to that series' baseline. `x_tick` is the shared column width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleContext {
    pub x_tick: f64,
    pub y_ticks: Vec<f64>,
    pub min_vals: Vec<f64>,
    pub padding: Padding,
    pub canvas_height: f64,
    /// Point labels are drawn only when `index % show_every == 0`.
    pub show_every: usize,
}

impl ScaleContext {
    /// Checks the context against the chart's series count.
    ///
    /// Zero or negative scale factors are configuration errors and must be
    /// rejected before any path construction, never computed into NaN.
    pub fn validate(&self, series_count: usize) -> ChartResult<()> {
        if !self.x_tick.is_finite() || self.x_tick <= 0.0 {
            return Err(ChartError::InvalidScale(format!(
                "x_tick must be finite and > 0, got {}",
                self.x_tick
            )));
        }
        if !self.canvas_height.is_finite() || self.canvas_height <= 0.0 {
            return Err(ChartError::InvalidScale(format!(
                "canvas_height must be finite and > 0, got {}",
                self.canvas_height
            )));
        }
        if self.y_ticks.len() != series_count || self.min_vals.len() != series_count {
            return Err(ChartError::InvalidScale(format!(
                "expected {} y_ticks and min_vals, got {} and {}",
                series_count,
                self.y_ticks.len(),
                self.min_vals.len()
            )));
        }
        for (index, tick) in self.y_ticks.iter().enumerate() {
            if !tick.is_finite() || *tick <= 0.0 {
                return Err(ChartError::InvalidScale(format!(
                    "y_tick for series {index} must be finite and > 0, got {tick}"
                )));
            }
        }
        for (index, min_val) in self.min_vals.iter().enumerate() {
            if !min_val.is_finite() {
                return Err(ChartError::InvalidScale(format!(
                    "min_val for series {index} must be finite, got {min_val}"
                )));
            }
        }
        if self.show_every == 0 {
            return Err(ChartError::InvalidScale(
                "show_every must be >= 1".to_owned(),
            ));
        }
        for (name, value) in [
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.bottom", self.padding.bottom),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidScale(format!(
                    "`{name}` must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Maps one data point to its pixel position.
    ///
    /// Deterministic and side-effect free: every overlay drawn after the path
    /// recomputes positions through this function and stays aligned with it.
    /// Callers must `validate` the context first.
    #[must_use]
    pub fn map_point(&self, series_index: usize, point_index: usize, value: f64) -> PixelPoint {
        let x = point_index as f64 * self.x_tick + self.padding.left + self.x_tick / 2.0;
        let y = self.canvas_height
            - (value - self.min_vals[series_index]) * self.y_ticks[series_index]
            - self.padding.bottom
            + self.padding.top;
        PixelPoint::new(x, y)
    }

    /// Pixel y of the series' drawn baseline (its own minimum value).
    #[must_use]
    pub fn baseline_y(&self, series_index: usize) -> f64 {
        self.map_point(series_index, 0, self.min_vals[series_index]).y
    }
}

/// Resolves the effective marker radius for one chart draw.
///
/// The constant 1 reserves one pixel of gap between adjacent points. The
/// result is clamped to `[0, desired_radius]` so markers never overlap their
/// neighbors and never exceed the configured radius in wide columns. Computed
/// once per draw and shared with label vertical offsets.
#[must_use]
pub fn resolve_point_radius(x_tick: f64, stroke_width: f64, desired_radius: f64) -> f64 {
    let raw = (x_tick - 1.0 - stroke_width) / 2.0;
    raw.min(desired_radius).max(0.0)
}
