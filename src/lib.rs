//! plotline-rs: geometry engine for animated line and step charts.
//!
//! The crate turns ordered, possibly gappy numeric series into drawable
//! vector paths plus pixel-aligned overlays (markers, labels, fills, hover
//! hit-regions). Painting is delegated to a host-implemented [`render::Surface`];
//! the engine only decides what geometry to request.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
