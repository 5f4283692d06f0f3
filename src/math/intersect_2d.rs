use super::{Point3, TOLERANCE};

/// Bounded segment-segment intersection in the XY plane.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Touching endpoints count as an intersection; parallel segments never do.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<(Point3, f64, f64)> {
    let (dax, day) = (a1.x - a0.x, a1.y - a0.y);
    let (dbx, dby) = (b1.x - b0.x, b1.y - b0.y);

    let cross = dax * dby - day * dbx;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * dby - dy * dbx) / cross;
    let u = (dx * day - dy * dax) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = Point3::new(a0.x + dax * t_clamped, a0.y + day * t_clamped, a0.z);
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Returns the minimum XY distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point3, a: &Point3, b: &Point3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    ((p.x - closest_x).powi(2) + (p.y - closest_y).powi(2)).sqrt()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn crossing_segments() {
        let (pt, t, u) =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0))
                .unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn touching_endpoints_intersect() {
        let hit =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0));
        assert!(hit.is_some());
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let hit =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn distance_to_segment_interior_and_end() {
        let above = point_to_segment_dist(&p(0.5, 1.0), &p(0.0, 0.0), &p(1.0, 0.0));
        let beyond = point_to_segment_dist(&p(2.0, 0.0), &p(0.0, 0.0), &p(1.0, 0.0));
        assert!((above - 1.0).abs() < TOLERANCE);
        assert!((beyond - 1.0).abs() < TOLERANCE);
    }
}
