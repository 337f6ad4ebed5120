pub mod path;
pub mod scale;
pub mod types;

pub use path::{FillQuad, LinePath, PathBuilder, PathSegment, PlottedPoint, StepEvent};
pub use scale::{Padding, ScaleContext, resolve_point_radius};
pub use types::{Interpolation, PixelPoint, Point, Series, SeriesOptions};
