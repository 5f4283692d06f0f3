use crate::error::{GeometryError, Result};
use crate::math::{ensure_finite, Point3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A straight line segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate triples.
    #[must_use]
    pub fn from_coords(start: [f64; 3], end: [f64; 3]) -> Self {
        Self::new(Point3::from(start), Point3::from(end))
    }

    /// Returns the same segment traversed end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Checks that both endpoints are finite.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn validate(&self) -> Result<()> {
        ensure_finite(&self.start)?;
        ensure_finite(&self.end)
    }
}

impl Curve for Segment {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        if !(-TOLERANCE..=1.0 + TOLERANCE).contains(&t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(self.start + (self.end - self.start) * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn start_point(&self) -> Result<Point3> {
        Ok(self.start)
    }

    fn end_point(&self) -> Result<Point3> {
        Ok(self.end)
    }

    fn length(&self) -> Result<f64> {
        Ok((self.end - self.start).norm())
    }
}
