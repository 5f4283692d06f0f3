use crate::geometry::Polygon;
use crate::math::Point3;

/// Point-in-polygon rule.
pub trait Containment {
    /// Returns `true` if `point` is inside or on the boundary of `polygon`.
    fn contains(&self, polygon: &Polygon, point: &Point3) -> bool;
}

/// Winding-number rule in the XY plane, boundary inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindingNumber;

impl Containment for WindingNumber {
    fn contains(&self, polygon: &Polygon, point: &Point3) -> bool {
        polygon.contains_point(point)
    }
}

/// Tests whether a point lies inside or on the boundary of a polygon.
///
/// Uses [`WindingNumber`] unless another rule is supplied.
pub struct PolygonContainsPoint<'a> {
    polygon: &'a Polygon,
    point: Point3,
}

impl<'a> PolygonContainsPoint<'a> {
    /// Creates a new `PolygonContainsPoint` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point3) -> Self {
        Self { polygon, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.execute_with(&WindingNumber)
    }

    /// Executes the query under a caller-supplied rule.
    pub fn execute_with<R: Containment + ?Sized>(&self, rule: &R) -> bool {
        rule.contains(self.polygon, &self.point)
    }
}
