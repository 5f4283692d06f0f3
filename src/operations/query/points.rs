use crate::math::angle_2d::{arc_angle, order_by_angle_and_distance};
use crate::math::polygon_2d::{convex_hull_2d, minimum_point};
use crate::math::{midpoint, Point3};

/// Point-set utilities operating in the XY plane.
pub struct PointSet {
    points: Vec<Point3>,
}

impl PointSet {
    /// Wraps a list of points.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Lowest point by y, then x, then z.
    #[must_use]
    pub fn minimum(&self) -> Option<Point3> {
        minimum_point(&self.points)
    }

    /// Points ordered by polar angle around `centre`, nearer first on ties.
    #[must_use]
    pub fn ordered_around(&self, centre: &Point3) -> Vec<Point3> {
        order_by_angle_and_distance(centre, &self.points)
    }

    /// Counter-clockwise convex hull.
    #[must_use]
    pub fn convex_hull(&self) -> Vec<Point3> {
        convex_hull_2d(&self.points)
    }
}

/// Midpoint of two points.
#[must_use]
pub fn mid_point(a: &Point3, b: &Point3) -> Point3 {
    midpoint(a, b)
}

/// Counter-clockwise angle in radians swept from `start` to `end` around `centre`.
#[must_use]
pub fn start_end_radians(centre: &Point3, start: &Point3, end: &Point3) -> f64 {
    arc_angle(centre, start, end)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn point_set_queries() {
        let set = PointSet::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ]);
        assert_eq!(set.minimum().unwrap(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(set.convex_hull().len(), 4);

        let around = set.ordered_around(&Point3::new(1.0, 1.0, 0.0));
        // The centre itself has angle 0 and distance 0.
        assert_eq!(around[0], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(around[1], Point3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn half_turn_between_opposite_points() {
        let c = Point3::origin();
        let r = start_end_radians(&c, &Point3::new(1.0, 0.0, 0.0), &Point3::new(-1.0, 0.0, 0.0));
        assert!((r - PI).abs() < 1e-12);
        assert_eq!(
            mid_point(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 2.0, 2.0)),
            Point3::new(1.0, 1.0, 1.0)
        );
    }
}
