use crate::error::Result;
use crate::geometry::{Polygon, Polyline};
use crate::math::Point3;
use crate::topology::{ChainData, EdgeId, IncidenceGraph};

/// Typed result of classifying one assembled chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// Closed chain through at least 3 distinct vertices. Vertices follow
    /// traversal order without repeating the first one.
    Polygon(Polygon),
    /// Open chain of 2 or more edges, or a closed chain too small to be a
    /// polygon (two edges between the same pair of vertices).
    Polyline(Polyline),
    /// A single edge.
    Isolated(EdgeId),
}

/// Decides polygon, polyline or isolated for a finalized chain.
///
/// Pure over the chain and graph; no traversal state is touched.
#[derive(Debug)]
pub struct PolygonClassifier<'a> {
    graph: &'a IncidenceGraph,
}

impl<'a> PolygonClassifier<'a> {
    /// Creates a classifier reading vertex positions from `graph`.
    #[must_use]
    pub fn new(graph: &'a IncidenceGraph) -> Self {
        Self { graph }
    }

    /// Classifies `chain`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` for an empty chain or one
    /// referring to edges outside the graph.
    pub fn classify(&self, chain: &ChainData) -> Result<Classified> {
        if let [single] = chain.edges.as_slice() {
            return Ok(Classified::Isolated(single.edge));
        }

        let sequence = chain.vertex_sequence(self.graph)?;
        let mut points: Vec<Point3> = sequence
            .iter()
            .map(|&v| Ok(self.graph.vertex(v)?.point))
            .collect::<Result<_>>()?;

        if chain.is_closed && chain.distinct_vertex_count(self.graph)? >= 3 {
            points.pop();
            return Ok(Classified::Polygon(Polygon::new(points)?));
        }
        Ok(Classified::Polyline(Polyline::new(points)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::reconstruct::ChainAssembler;

    fn classify_all(pairs: &[((f64, f64), (f64, f64))]) -> Vec<Classified> {
        let g = IncidenceGraph::build(
            pairs
                .iter()
                .map(|&((x0, y0), (x1, y1))| (Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0))),
            1e-6,
        )
        .unwrap();
        let chains = ChainAssembler::new(&g).execute().unwrap();
        let classifier = PolygonClassifier::new(&g);
        chains.values().map(|c| classifier.classify(c).unwrap()).collect()
    }

    #[test]
    fn triangle_is_polygon_without_closing_repeat() {
        let out = classify_all(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
        ]);
        assert_eq!(out.len(), 1);
        let Classified::Polygon(poly) = &out[0] else {
            panic!("expected polygon, got {:?}", out[0]);
        };
        assert_eq!(poly.vertices().len(), 3);
        assert_eq!(poly.vertices()[0], Point3::origin());
    }

    #[test]
    fn bigon_is_rejected_as_polygon() {
        let out = classify_all(&[((0.0, 0.0), (1.0, 0.0)), ((1.0, 0.0), (0.0, 0.0))]);
        assert_eq!(out.len(), 1);
        let Classified::Polyline(line) = &out[0] else {
            panic!("expected polyline, got {:?}", out[0]);
        };
        assert_eq!(line.vertices().len(), 3);
    }

    #[test]
    fn open_chain_is_polyline() {
        let out = classify_all(&[((0.0, 0.0), (1.0, 0.0)), ((1.0, 0.0), (1.0, 1.0))]);
        assert!(matches!(&out[0], Classified::Polyline(l) if l.vertices().len() == 3));
    }

    #[test]
    fn single_edge_is_isolated() {
        let out = classify_all(&[((0.0, 0.0), (1.0, 0.0)), ((3.0, 0.0), (4.0, 0.0))]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| matches!(c, Classified::Isolated(_))));
    }
}
