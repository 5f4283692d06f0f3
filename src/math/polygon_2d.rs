use std::cmp::Ordering;

use super::intersect_2d::point_to_segment_dist;
use super::{Point3, TOLERANCE};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Point-in-polygon test in the XY plane.
///
/// Returns `true` if the point is inside (non-zero winding number) or lies
/// on the boundary within `TOLERANCE`.
#[must_use]
pub fn point_in_polygon_2d(point: &Point3, polygon: &[Point3]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let n = polygon.len();
    let on_boundary = (0..n)
        .any(|i| point_to_segment_dist(point, &polygon[i], &polygon[(i + 1) % n]) < TOLERANCE);
    on_boundary || winding_number_2d(point, polygon) != 0
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number_2d(point: &Point3, verts: &[Point3]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = &verts[i];
        let b = &verts[(i + 1) % n];

        if a.y <= point.y {
            if b.y > point.y && cross_2d(a, b, point) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && cross_2d(a, b, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product of `(b - a)` and `(p - a)`.
#[inline]
fn cross_2d(a: &Point3, b: &Point3, p: &Point3) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Returns the minimum point ordered by y, then x, then z.
#[must_use]
pub fn minimum_point(points: &[Point3]) -> Option<Point3> {
    points.iter().copied().min_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
            .then(a.z.partial_cmp(&b.z).unwrap_or(Ordering::Equal))
    })
}

/// Convex hull in the XY plane (monotone chain).
///
/// Returns hull vertices counter-clockwise, without collinear points.
/// Inputs with fewer than 3 distinct points are returned deduplicated.
#[must_use]
pub fn convex_hull_2d(points: &[Point3]) -> Vec<Point3> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    pts.dedup_by(|a, b| (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE);
    if pts.len() < 3 {
        return pts;
    }

    let reversed: Vec<Point3> = pts.iter().rev().copied().collect();
    let mut hull: Vec<Point3> = Vec::with_capacity(pts.len() * 2);
    for pass in [&pts[..], &reversed[..]] {
        let floor = hull.len();
        for p in pass {
            while hull.len() >= floor + 2
                && cross_2d(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= TOLERANCE
            {
                hull.pop();
            }
            hull.push(*p);
        }
        // Last point of each chain starts the next one.
        hull.pop();
    }
    hull
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point3::new(0.0, 0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn containment_inside_outside_boundary() {
        let sq = unit_square();
        assert!(point_in_polygon_2d(&Point3::new(0.5, 0.5, 0.0), &sq));
        assert!(!point_in_polygon_2d(&Point3::new(1.5, 0.5, 0.0), &sq));
        assert!(point_in_polygon_2d(&Point3::new(1.0, 0.5, 0.0), &sq));
        assert!(point_in_polygon_2d(&Point3::new(0.0, 0.0, 0.0), &sq));
    }

    #[test]
    fn minimum_point_prefers_y_then_x() {
        let pts = vec![
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
            Point3::new(0.2, 0.5, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ];
        let m = minimum_point(&pts).unwrap();
        assert!((m.x - 0.2).abs() < TOLERANCE);
        assert!((m.y - 0.5).abs() < TOLERANCE);
        assert!(minimum_point(&[]).is_none());
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let mut pts = unit_square();
        pts.push(Point3::new(0.5, 0.5, 0.0));
        pts.push(Point3::new(0.5, 0.0, 0.0));
        let hull = convex_hull_2d(&pts);
        assert_eq!(hull.len(), 4);
        assert!(signed_area_2d(&hull) > 0.0);
        assert!((signed_area_2d(&hull) - 1.0).abs() < TOLERANCE);
    }
}
