use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Interpolation, PixelPoint, Point, ScaleContext};

/// One command of a line path, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

impl PathSegment {
    #[must_use]
    pub fn end(self) -> PixelPoint {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => PixelPoint::new(x, y),
        }
    }

    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, Self::MoveTo { .. })
    }
}

/// The vector-geometry description of one line, built segment by segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePath {
    segments: Vec<PathSegment>,
}

impl LinePath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// SVG-style rendition (`M x y` / `L x y`) for backends and snapshots.
impl fmt::Display for LinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            match segment {
                PathSegment::MoveTo { x, y } => write!(f, "M {x} {y}")?,
                PathSegment::LineTo { x, y } => write!(f, "L {x} {y}")?,
            }
        }
        Ok(())
    }
}

/// Closed quadrilateral filled under one line segment.
///
/// Corners run previous-x/baseline, previous-x/previous-y, current-x/current-y,
/// current-x/baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillQuad {
    pub x_prev: f64,
    pub y_prev: f64,
    pub x_curr: f64,
    pub y_curr: f64,
    pub baseline_y: f64,
}

impl FillQuad {
    #[must_use]
    pub fn polygon(&self) -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(self.x_prev, self.baseline_y),
            PixelPoint::new(self.x_prev, self.y_prev),
            PixelPoint::new(self.x_curr, self.y_curr),
            PixelPoint::new(self.x_curr, self.baseline_y),
        ]
    }

    /// Collapsed start shape for the fill reveal: every corner on the baseline.
    #[must_use]
    pub fn degenerate(&self) -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(self.x_prev, self.baseline_y),
            PixelPoint::new(self.x_prev, self.baseline_y),
            PixelPoint::new(self.x_curr, self.baseline_y),
            PixelPoint::new(self.x_curr, self.baseline_y),
        ]
    }
}

/// A committed non-null point, ready for overlay rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub index: usize,
    pub pixel: PixelPoint,
    pub value: f64,
    pub click_target: Option<String>,
}

/// Output of one `PathBuilder::advance` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StepEvent {
    pub index: usize,
    /// Segments appended by this step; empty for a skipped null, two under
    /// step interpolation.
    pub segments: SmallVec<[PathSegment; 2]>,
    /// Present only when this step committed a non-null point.
    pub point: Option<PlottedPoint>,
    /// Present when `fill_lines` is set and this step drew a segment.
    pub fill: Option<FillQuad>,
}

/// Walks one series left to right, one point per `advance` call.
///
/// Replaces the callback-recursive walk of classic canvas charting code with
/// an explicit state machine so timed reveal can suspend between steps
/// without deep call stacks.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    series_index: usize,
    points: Vec<Point>,
    interpolation: Interpolation,
    fill_lines: bool,
    scale: ScaleContext,
    index: usize,
    prev: Option<PixelPoint>,
    started: bool,
    path: LinePath,
}

impl PathBuilder {
    #[must_use]
    pub fn new(
        series_index: usize,
        points: Vec<Point>,
        interpolation: Interpolation,
        fill_lines: bool,
        scale: ScaleContext,
    ) -> Self {
        Self {
            series_index,
            points,
            interpolation,
            fill_lines,
            scale,
            index: 0,
            prev: None,
            started: false,
            path: LinePath::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the walk has reached its sole terminal condition,
    /// `index == len`.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.index == self.points.len()
    }

    /// Path accumulated so far.
    #[must_use]
    pub fn path(&self) -> &LinePath {
        &self.path
    }

    /// Processes the next point. Returns `None` once every index is consumed.
    pub fn advance(&mut self) -> Option<StepEvent> {
        if self.is_done() {
            return None;
        }

        let index = self.index;
        self.index += 1;

        let mut segments: SmallVec<[PathSegment; 2]> = SmallVec::new();
        let mut fill = None;
        let mut plotted = None;

        match self.points[index].numeric() {
            None => {
                if index == 0 {
                    // A null first point still seeds the line's anchor; it
                    // contributes no stroke because the line stays unstarted.
                    let anchor = self.scale.map_point(
                        self.series_index,
                        0,
                        self.scale.min_vals[self.series_index],
                    );
                    segments.push(PathSegment::MoveTo {
                        x: anchor.x,
                        y: anchor.y,
                    });
                } else if !self.interpolation.bridges_nulls() {
                    self.prev = None;
                    self.started = false;
                }
            }
            Some(value) => {
                let pixel = self.scale.map_point(self.series_index, index, value);
                match (self.started, self.prev) {
                    (true, Some(prev)) => {
                        if self.interpolation == Interpolation::Step {
                            segments.push(PathSegment::LineTo {
                                x: pixel.x,
                                y: prev.y,
                            });
                            segments.push(PathSegment::LineTo {
                                x: pixel.x,
                                y: pixel.y,
                            });
                        } else {
                            segments.push(PathSegment::LineTo {
                                x: pixel.x,
                                y: pixel.y,
                            });
                        }
                        if self.fill_lines {
                            fill = Some(FillQuad {
                                x_prev: prev.x,
                                y_prev: prev.y,
                                x_curr: pixel.x,
                                y_curr: pixel.y,
                                baseline_y: self.scale.baseline_y(self.series_index),
                            });
                        }
                    }
                    _ => {
                        segments.push(PathSegment::MoveTo {
                            x: pixel.x,
                            y: pixel.y,
                        });
                        self.started = true;
                    }
                }
                self.prev = Some(pixel);
                plotted = Some(PlottedPoint {
                    index,
                    pixel,
                    value,
                    click_target: self.points[index].click_target.clone(),
                });
            }
        }

        for segment in &segments {
            self.path.push(*segment);
        }

        Some(StepEvent {
            index,
            segments,
            point: plotted,
            fill,
        })
    }
}
