pub mod curve;
pub mod polygon;

pub use curve::{Arc, Curve, CurveDomain, Segment};
pub use polygon::{Polygon, Polyline};
