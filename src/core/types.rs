use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One sample in a series.
///
/// `value: None` is an explicit gap. The literal `0.0` is a valid, non-null
/// value and must never be folded into the missing case.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub value: Option<f64>,
    /// Optional navigation target attached to this point's marker.
    pub click_target: Option<String>,
}

impl Point {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            click_target: None,
        }
    }

    #[must_use]
    pub fn gap() -> Self {
        Self {
            value: None,
            click_target: None,
        }
    }

    #[must_use]
    pub fn with_click_target(mut self, target: impl Into<String>) -> Self {
        self.click_target = Some(target.into());
        self
    }

    /// Returns the plottable value.
    ///
    /// Non-finite values (NaN, infinities) are malformed input and are
    /// reported as a gap rather than propagated into geometry.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self.value {
            Some(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }
}

/// Interpolation policy applied when a series crosses a null gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// A gap restarts the line: the next non-null point begins a new subpath.
    #[default]
    None,
    /// The line bridges the gap with a direct segment to the next non-null point.
    InterpolateNulls,
    /// Horizontal-then-vertical stair segments instead of diagonals; gaps are
    /// bridged like `InterpolateNulls`.
    Step,
}

impl Interpolation {
    /// Whether the previous plotted point survives a null gap.
    #[must_use]
    pub fn bridges_nulls(self) -> bool {
        matches!(self, Self::InterpolateNulls | Self::Step)
    }
}

/// Per-series rendering options, immutable for the chart's lifetime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesOptions {
    pub interpolation: Interpolation,
    pub fill_lines: bool,
    pub show_points: bool,
    pub fill_points: bool,
    pub label_points: bool,
    pub animate_points: bool,
    /// Stroked-marker color; `None` selects the simple solid-dot marker.
    pub point_stroke: Option<Color>,
    /// Unit suffix appended to point labels.
    pub unit: Option<String>,
}

impl SeriesOptions {
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn with_fill_lines(mut self, fill_lines: bool) -> Self {
        self.fill_lines = fill_lines;
        self
    }

    #[must_use]
    pub fn with_show_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    #[must_use]
    pub fn with_fill_points(mut self, fill_points: bool) -> Self {
        self.fill_points = fill_points;
        self
    }

    #[must_use]
    pub fn with_label_points(mut self, label_points: bool) -> Self {
        self.label_points = label_points;
        self
    }

    #[must_use]
    pub fn with_animate_points(mut self, animate_points: bool) -> Self {
        self.animate_points = animate_points;
        self
    }

    #[must_use]
    pub fn with_point_stroke(mut self, color: Color) -> Self {
        self.point_stroke = Some(color);
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// One named sequence of values plotted as a single line.
///
/// All series in a chart share the same length; index `i` in every series
/// maps to the same x position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
    pub options: SeriesOptions,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
            options: SeriesOptions::default(),
        }
    }

    /// Builds a series from raw optional values.
    #[must_use]
    pub fn from_values(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let points = values
            .iter()
            .map(|value| Point {
                value: *value,
                click_target: None,
            })
            .collect();
        Self::new(name, points)
    }

    #[must_use]
    pub fn with_options(mut self, options: SeriesOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Mapped pixel position of one data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
