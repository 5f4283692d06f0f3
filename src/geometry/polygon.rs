use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{point_in_polygon_2d, signed_area_2d};
use crate::math::{ensure_finite, Point3};

use super::curve::Segment;

/// A closed polygon. The last vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
}

impl Polygon {
    /// Creates a polygon from at least 3 finite vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 3 vertices and
    /// `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        for v in &vertices {
            ensure_finite(v)?;
        }
        Ok(Self { vertices })
    }

    /// Returns the polygon vertices without the closing repeat.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Iterates the closed boundary as segments, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area in the XY plane; positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns `true` if `point` lies inside or on the boundary (XY plane).
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        point_in_polygon_2d(point, &self.vertices)
    }
}

/// An open polyline through at least 2 vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point3>,
}

impl Polyline {
    /// Creates a polyline from at least 2 finite vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 2 vertices and
    /// `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "polyline needs at least 2 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        for v in &vertices {
            ensure_finite(v)?;
        }
        Ok(Self { vertices })
    }

    /// Returns the polyline vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Iterates consecutive vertex pairs as segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertices.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Total length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vertices.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn polygon_requires_three_vertices() {
        let err = Polygon::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        assert!(err.is_err());
    }

    #[test]
    fn polygon_edges_close_the_loop() {
        let edges: Vec<Segment> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].end, Point3::origin());
    }

    #[test]
    fn polygon_area_and_containment() {
        let sq = square();
        assert!((sq.signed_area() - 4.0).abs() < TOLERANCE);
        assert!(sq.contains_point(&Point3::new(1.0, 1.0, 0.0)));
        assert!(!sq.contains_point(&Point3::new(3.0, 1.0, 0.0)));
    }

    #[test]
    fn polyline_length() {
        let pl = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
            Point3::new(3.0, 5.0, 0.0),
        ])
        .unwrap();
        assert!((pl.length() - 6.0).abs() < TOLERANCE);
        assert_eq!(pl.segments().count(), 2);
    }

    #[test]
    fn polyline_rejects_infinite_vertex() {
        let pl = Polyline::new(vec![Point3::origin(), Point3::new(f64::INFINITY, 0.0, 0.0)]);
        assert!(pl.is_err());
    }
}
