mod arc;
mod segment;

pub use arc::Arc;
pub use segment::Segment;

use crate::error::Result;
use crate::math::Point3;

/// Number of chords used by the default [`Curve::length`] approximation.
const LENGTH_SAMPLES: u32 = 64;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Maps a normalized fraction in `[0, 1]` onto the domain.
    #[must_use]
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.t_min + (self.t_max - self.t_min) * fraction
    }
}

/// Trait for bounded parametric curves in 3D space.
///
/// Chain assembly only looks at a curve's two endpoints; the rest of the
/// trait serves polygonization and length queries.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Point at the start of the domain.
    ///
    /// # Errors
    ///
    /// Propagates evaluation failures.
    fn start_point(&self) -> Result<Point3> {
        self.evaluate(self.domain().t_min)
    }

    /// Point at the end of the domain.
    ///
    /// # Errors
    ///
    /// Propagates evaluation failures.
    fn end_point(&self) -> Result<Point3> {
        self.evaluate(self.domain().t_max)
    }

    /// Arc length of the curve.
    ///
    /// The default sums chords over evenly spaced parameters; implementors
    /// with a closed form should override it.
    ///
    /// # Errors
    ///
    /// Propagates evaluation failures.
    fn length(&self) -> Result<f64> {
        let domain = self.domain();
        let mut prev = self.evaluate(domain.t_min)?;
        let mut total = 0.0;
        for i in 1..=LENGTH_SAMPLES {
            let next = self.evaluate(domain.lerp(f64::from(i) / f64::from(LENGTH_SAMPLES)))?;
            total += (next - prev).norm();
            prev = next;
        }
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Parabola `y = t^2` on `[0, 1]`, relying on the sampled length.
    struct Parabola;

    impl Curve for Parabola {
        fn evaluate(&self, t: f64) -> Result<Point3> {
            Ok(Point3::new(t, t * t, 0.0))
        }

        fn domain(&self) -> CurveDomain {
            CurveDomain::new(0.0, 1.0)
        }
    }

    #[test]
    fn default_endpoints_follow_domain() {
        assert_eq!(Parabola.start_point().unwrap(), Point3::origin());
        assert_eq!(Parabola.end_point().unwrap(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn sampled_length_approaches_closed_form() {
        // ∫ sqrt(1 + 4t²) dt on [0, 1]
        let exact = (2.0_f64.mul_add(5.0_f64.sqrt(), (2.0 + 5.0_f64.sqrt()).ln())) / 4.0;
        let len = Parabola.length().unwrap();
        assert!((len - exact).abs() < 1e-3, "len = {len}, exact = {exact}");
    }
}
