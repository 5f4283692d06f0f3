mod contains;
mod intersect;
mod points;

pub use contains::{Containment, PolygonContainsPoint, WindingNumber};
pub use intersect::{point_on_segment, SegmentPolygonIntersect, SegmentsCross};
pub use points::{mid_point, start_end_radians, PointSet};
