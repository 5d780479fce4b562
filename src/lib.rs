//! chart-geom: XY chart geometry engine.
//!
//! Converts per-series data plus scales into drawable geometry descriptors
//! (points, bars, lines, areas with curve interpolation), a spatial index
//! for hover lookups, and the style/highlight plumbing a host drawing layer
//! needs. The drawing itself is out of scope: hosts consume the descriptors
//! with whatever raster or vector backend they have.

pub mod core;
pub mod error;
pub mod interaction;
pub mod legend;
pub mod style;
pub mod telemetry;
pub mod text;

pub use error::{ChartError, ChartResult};
