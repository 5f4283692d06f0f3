//! Reconstructs closed polygons, open polylines and connected curve chains
//! from an unordered collection of segments.

pub mod config;
pub mod error;
pub mod external;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::ReconstructOptions;
pub use error::{Result, WiregraphError};
pub use geometry::{Polygon, Polyline, Segment};
pub use operations::{BuildPolygons, GroupCurves, Polygonize, Reconstruction};
