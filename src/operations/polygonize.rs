use crate::error::{OperationError, Result};
use crate::geometry::{Curve, Polyline, Segment};
use crate::math::{Point3, VERTEX_TOLERANCE};

/// Largest number of pieces a single curve may be split into.
pub const MAX_DIVISIONS: u32 = 1 << 20;

/// Approximates a curve by straight segments no longer than `max_length`.
///
/// A curve whose length matches its chord is returned as one segment.
/// Otherwise the curve is split into `ceil(length / max_length)` pieces at
/// evenly spaced parameters, which is equal arc length for segments and arcs.
#[derive(Debug)]
pub struct Polygonize<'a, C> {
    curve: &'a C,
    max_length: f64,
}

impl<'a, C: Curve> Polygonize<'a, C> {
    /// Creates a new polygonization of `curve`.
    #[must_use]
    pub fn new(curve: &'a C, max_length: f64) -> Self {
        Self { curve, max_length }
    }

    /// Executes the operation, returning the approximating segments in order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless `max_length` is finite and
    /// positive, or when the curve would need more than [`MAX_DIVISIONS`]
    /// pieces; propagates curve evaluation failures.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        let points = self.points()?;
        Ok(points.windows(2).map(|w| Segment::new(w[0], w[1])).collect())
    }

    /// Executes the operation, joining the segments into one polyline.
    ///
    /// # Errors
    ///
    /// Same as [`Polygonize::execute`].
    pub fn execute_polyline(&self) -> Result<Polyline> {
        Polyline::new(self.points()?)
    }

    fn points(&self) -> Result<Vec<Point3>> {
        if !self.max_length.is_finite() || self.max_length <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "max_length must be finite and positive, got {}",
                self.max_length
            ))
            .into());
        }

        let start = self.curve.start_point()?;
        let end = self.curve.end_point()?;
        let length = self.curve.length()?;
        let chord = (end - start).norm();
        if (length - chord).abs() <= VERTEX_TOLERANCE {
            return Ok(vec![start, end]);
        }

        let divisions = (length / self.max_length).ceil().max(1.0);
        if divisions.is_nan() || divisions > f64::from(MAX_DIVISIONS) {
            return Err(OperationError::InvalidInput(format!(
                "max_length {} needs {divisions} pieces, limit is {MAX_DIVISIONS}",
                self.max_length
            ))
            .into());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let divisions = divisions as u32;
        let domain = self.curve.domain();
        let mut points = Vec::with_capacity(divisions as usize + 1);
        points.push(start);
        for i in 1..divisions {
            points.push(
                self.curve
                    .evaluate(domain.lerp(f64::from(i) / f64::from(divisions)))?,
            );
        }
        points.push(end);
        Ok(points)
    }
}
