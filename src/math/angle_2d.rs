use std::cmp::Ordering;
use std::f64::consts::PI;

use super::Point3;

/// Normalizes an angle to [0, 2pi).
#[must_use]
pub fn normalize_angle(a: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let mut r = a % two_pi;
    if r < 0.0 {
        r += two_pi;
    }
    r
}

/// Polar angle of `point` around `centre` in the XY plane, in [0, 2pi).
#[must_use]
pub fn polar_angle(centre: &Point3, point: &Point3) -> f64 {
    normalize_angle((point.y - centre.y).atan2(point.x - centre.x))
}

/// Counter-clockwise sweep from `start` to `end` around `centre`, in [0, 2pi).
#[must_use]
pub fn arc_angle(centre: &Point3, start: &Point3, end: &Point3) -> f64 {
    normalize_angle(polar_angle(centre, end) - polar_angle(centre, start))
}

/// Orders points by polar angle around `centre`; equal angles put the point
/// closer to `centre` first.
#[must_use]
pub fn order_by_angle_and_distance(centre: &Point3, points: &[Point3]) -> Vec<Point3> {
    let mut keyed: Vec<(f64, f64, Point3)> = points
        .iter()
        .map(|p| (polar_angle(centre, p), (p - centre).norm(), *p))
        .collect();
    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    });
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn normalize_negative_angle() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < TOLERANCE);
        assert!(normalize_angle(2.0 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn arc_angle_quarter_turn() {
        let c = Point3::origin();
        let a = arc_angle(&c, &Point3::new(1.0, 0.0, 0.0), &Point3::new(0.0, 1.0, 0.0));
        assert!((a - PI / 2.0).abs() < TOLERANCE);
        let b = arc_angle(&c, &Point3::new(0.0, 1.0, 0.0), &Point3::new(1.0, 0.0, 0.0));
        assert!((b - 1.5 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn ordering_breaks_ties_by_distance() {
        let c = Point3::origin();
        let pts = vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let ordered = order_by_angle_and_distance(&c, &pts);
        assert_eq!(ordered[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(ordered[1], Point3::new(2.0, 0.0, 0.0));
        assert_eq!(ordered[2], Point3::new(0.0, 1.0, 0.0));
    }
}
