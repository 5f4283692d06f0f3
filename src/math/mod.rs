pub mod angle_2d;
pub mod intersect_2d;
pub mod polygon_2d;

use crate::error::{GeometryError, Result};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default absolute per-axis tolerance under which two coordinates denote
/// the same vertex.
pub const VERTEX_TOLERANCE: f64 = 1e-6;

/// Rejects points with NaN or infinite coordinates.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` naming the first offending axis.
pub fn ensure_finite(point: &Point3) -> Result<()> {
    for (axis, value) in [("x", point.x), ("y", point.y), ("z", point.z)] {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite { axis, value }.into());
        }
    }
    Ok(())
}

/// Per-axis almost-equality: `|Δx| ≤ eps ∧ |Δy| ≤ eps ∧ |Δz| ≤ eps`.
#[must_use]
pub fn almost_equal(a: &Point3, b: &Point3, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
}

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn almost_equal_is_per_axis() {
        let a = Point3::new(0.0, 0.0, 0.0);
        assert!(almost_equal(&a, &Point3::new(1e-7, -1e-7, 1e-7), 1e-6));
        assert!(!almost_equal(&a, &Point3::new(0.0, 2e-6, 0.0), 1e-6));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(ensure_finite(&Point3::new(0.0, 1.0, 2.0)).is_ok());
        assert!(ensure_finite(&Point3::new(f64::NAN, 1.0, 2.0)).is_err());
        assert!(ensure_finite(&Point3::new(0.0, 1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn midpoint_basic() {
        let m = midpoint(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 4.0, -2.0));
        assert!((m - Point3::new(1.0, 2.0, -1.0)).norm() < TOLERANCE);
    }
}
