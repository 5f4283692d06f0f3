use crate::geometry::{Polygon, Segment};
use crate::math::intersect_2d::{point_to_segment_dist, segment_segment_intersect_2d};
use crate::math::{Point3, TOLERANCE};

/// Returns `true` if `point` lies on `segment` (XY plane, within `TOLERANCE`).
#[must_use]
pub fn point_on_segment(point: &Point3, segment: &Segment) -> bool {
    point_to_segment_dist(point, &segment.start, &segment.end) < TOLERANCE
}

/// Tests whether two segments cross in the XY plane.
///
/// Contact where an endpoint of the second segment lies on the first does
/// not count as crossing.
pub struct SegmentsCross {
    first: Segment,
    second: Segment,
}

impl SegmentsCross {
    /// Creates a new `SegmentsCross` query.
    #[must_use]
    pub fn new(first: Segment, second: Segment) -> Self {
        Self { first, second }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let (a, b) = (&self.first, &self.second);
        if segment_segment_intersect_2d(&a.start, &a.end, &b.start, &b.end).is_none() {
            return false;
        }
        !(point_on_segment(&b.start, a) || point_on_segment(&b.end, a))
    }
}

/// Intersection points between a segment and a polygon boundary, ordered
/// along the segment. Points closer than `TOLERANCE` are reported once.
pub struct SegmentPolygonIntersect<'a> {
    segment: Segment,
    polygon: &'a Polygon,
}

impl<'a> SegmentPolygonIntersect<'a> {
    /// Creates a new `SegmentPolygonIntersect` query.
    #[must_use]
    pub fn new(segment: Segment, polygon: &'a Polygon) -> Self {
        Self { segment, polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let s = &self.segment;
        let mut hits: Vec<(f64, Point3)> = self
            .polygon
            .edges()
            .filter_map(|e| segment_segment_intersect_2d(&s.start, &s.end, &e.start, &e.end))
            .map(|(pt, t, _)| (t, pt))
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.dedup_by(|a, b| (a.1 - b.1).norm() < TOLERANCE);
        hits.into_iter().map(|(_, pt)| pt).collect()
    }
}
