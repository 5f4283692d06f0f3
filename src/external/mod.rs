//! Boundary to the path-planning and polygon-boolean collaborators.
//!
//! The algorithms behind these traits live outside this crate. Callers plug
//! an implementation in and go through [`Delegate`], which validates inputs
//! and hands any collaborator failure back as `DelegationError` with the
//! original error as its source.

mod graph;

pub use graph::{GraphKind, PathGraph};

use tracing::debug;

use crate::error::{DelegationError, OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{Point3, VERTEX_TOLERANCE};

/// Builds and queries visibility graphs.
pub trait VisibilityGraphBuilder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Connects mutually visible vertices of `base`. A reduced graph omits
    /// edges between two vertices that are both convex on their polygon.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn visibility_graph(
        &self,
        base: &PathGraph,
        reduced: bool,
    ) -> std::result::Result<PathGraph, Self::Error>;

    /// Vertices of `base` visible from `origin`, as a graph.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn vertex_visibility(
        &self,
        base: &PathGraph,
        origin: Point3,
    ) -> std::result::Result<PathGraph, Self::Error>;

    /// Shortest path between two points over a visibility graph.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn shortest_path(
        &self,
        visibility: &PathGraph,
        origin: Point3,
        destination: Point3,
    ) -> std::result::Result<PathGraph, Self::Error>;
}

/// Polygon boolean combinators.
pub trait PolygonBoolean {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Implementation-defined.
    fn union(
        &self,
        subject: &Polygon,
        clip: &Polygon,
    ) -> std::result::Result<Vec<Polygon>, Self::Error>;

    /// # Errors
    ///
    /// Implementation-defined.
    fn difference(
        &self,
        subject: &Polygon,
        clip: &Polygon,
    ) -> std::result::Result<Vec<Polygon>, Self::Error>;

    /// # Errors
    ///
    /// Implementation-defined.
    fn intersection(
        &self,
        subject: &Polygon,
        clip: &Polygon,
    ) -> std::result::Result<Vec<Polygon>, Self::Error>;

    /// # Errors
    ///
    /// Implementation-defined.
    fn union_all(
        &self,
        subjects: &[Polygon],
        clips: &[Polygon],
    ) -> std::result::Result<Vec<Polygon>, Self::Error>;

    /// # Errors
    ///
    /// Implementation-defined.
    fn difference_all(
        &self,
        subjects: &[Polygon],
        clips: &[Polygon],
    ) -> std::result::Result<Vec<Polygon>, Self::Error>;

    /// # Errors
    ///
    /// Implementation-defined.
    fn intersection_all(
        &self,
        subjects: &[Polygon],
        clips: &[Polygon],
    ) -> std::result::Result<Vec<Polygon>, Self::Error>;
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: PathGraph,
    /// Sum of the path's edge lengths.
    pub length: f64,
}

/// Calls a collaborator, mapping its failures to `DelegationError`.
#[derive(Debug, Clone)]
pub struct Delegate<T> {
    inner: T,
}

fn delegated<E>(collaborator: &'static str) -> impl FnOnce(E) -> DelegationError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |source| DelegationError::Failed {
        collaborator,
        source: Box::new(source),
    }
}

impl<T> Delegate<T> {
    /// Wraps a collaborator.
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped collaborator.
    #[must_use]
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: VisibilityGraphBuilder> Delegate<T> {
    /// Builds a visibility graph over boundary polygons and the internal
    /// obstacle polygons they enclose.
    ///
    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn build(
        &self,
        boundaries: &[Polygon],
        internals: &[Polygon],
        reduced: bool,
    ) -> Result<PathGraph> {
        let base = PathGraph::from_polygons(boundaries, internals, VERTEX_TOLERANCE)?;
        self.visibility_graph(&base, reduced)
    }

    /// Builds a visibility graph from a base graph.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `base` already is a visibility
    /// graph or the returned graph has out-of-range edges, and
    /// `DelegationError` if the collaborator fails.
    pub fn visibility_graph(&self, base: &PathGraph, reduced: bool) -> Result<PathGraph> {
        require_kind(base, GraphKind::Base)?;
        let graph = self
            .inner
            .visibility_graph(base, reduced)
            .map_err(delegated("visibility graph"))?;
        graph.validate()?;
        debug!(edges = graph.edges.len(), reduced, "visibility graph built");
        Ok(graph)
    }

    /// Graph of vertices of `base` visible from `origin`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `base` is a visibility graph
    /// or the returned graph has out-of-range edges, and `DelegationError` if
    /// the collaborator fails.
    pub fn vertex_visibility(&self, base: &PathGraph, origin: Point3) -> Result<PathGraph> {
        require_kind(base, GraphKind::Base)?;
        let graph = self
            .inner
            .vertex_visibility(base, origin)
            .map_err(delegated("vertex visibility"))?;
        graph.validate()?;
        Ok(graph)
    }

    /// Shortest path between two points; the length is the sum of the
    /// returned path's edge lengths.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless `visibility` is a
    /// visibility graph, or if the returned path has out-of-range edges;
    /// `DelegationError` if the collaborator fails.
    pub fn shortest_path(
        &self,
        visibility: &PathGraph,
        origin: Point3,
        destination: Point3,
    ) -> Result<ShortestPath> {
        require_kind(visibility, GraphKind::Visibility)?;
        let path = self
            .inner
            .shortest_path(visibility, origin, destination)
            .map_err(delegated("shortest path"))?;
        path.validate()?;
        let length = path.total_length();
        Ok(ShortestPath { path, length })
    }
}

impl<T: PolygonBoolean> Delegate<T> {
    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn union(&self, subject: &Polygon, clip: &Polygon) -> Result<Vec<Polygon>> {
        Ok(self.inner.union(subject, clip).map_err(delegated("polygon union"))?)
    }

    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn difference(&self, subject: &Polygon, clip: &Polygon) -> Result<Vec<Polygon>> {
        Ok(self
            .inner
            .difference(subject, clip)
            .map_err(delegated("polygon difference"))?)
    }

    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn intersection(&self, subject: &Polygon, clip: &Polygon) -> Result<Vec<Polygon>> {
        Ok(self
            .inner
            .intersection(subject, clip)
            .map_err(delegated("polygon intersection"))?)
    }

    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn union_all(
        &self,
        subjects: &[Polygon],
        clips: &[Polygon],
    ) -> Result<Vec<Polygon>> {
        Ok(self
            .inner
            .union_all(subjects, clips)
            .map_err(delegated("polygon union"))?)
    }

    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn difference_all(
        &self,
        subjects: &[Polygon],
        clips: &[Polygon],
    ) -> Result<Vec<Polygon>> {
        Ok(self
            .inner
            .difference_all(subjects, clips)
            .map_err(delegated("polygon difference"))?)
    }

    /// # Errors
    ///
    /// Returns `DelegationError` if the collaborator fails.
    pub fn intersection_all(
        &self,
        subjects: &[Polygon],
        clips: &[Polygon],
    ) -> Result<Vec<Polygon>> {
        Ok(self
            .inner
            .intersection_all(subjects, clips)
            .map_err(delegated("polygon intersection"))?)
    }
}

fn require_kind(graph: &PathGraph, kind: GraphKind) -> Result<()> {
    if graph.kind != kind {
        return Err(OperationError::InvalidInput(format!(
            "expected a {kind:?} graph, got {:?}",
            graph.kind
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::error::WiregraphError;

    #[derive(Debug, thiserror::Error)]
    #[error("library exploded")]
    struct Boom;

    type Out<T> = std::result::Result<T, Boom>;

    /// Visibility stub: connects every vertex pair, or fails on demand.
    #[derive(Default)]
    struct Complete {
        fail: bool,
        /// Return a path whose edge points past its vertex list.
        dangling_path: bool,
    }

    impl VisibilityGraphBuilder for Complete {
        type Error = Boom;

        fn visibility_graph(&self, base: &PathGraph, _reduced: bool) -> Out<PathGraph> {
            if self.fail {
                return Err(Boom);
            }
            let n = base.vertices.len();
            let edges = (0..n).flat_map(|a| ((a + 1)..n).map(move |b| (a, b))).collect();
            Ok(PathGraph {
                kind: GraphKind::Visibility,
                vertices: base.vertices.clone(),
                edges,
                boundary_count: base.boundary_count,
            })
        }

        fn vertex_visibility(&self, base: &PathGraph, _origin: Point3) -> Out<PathGraph> {
            Ok(base.clone())
        }

        fn shortest_path(
            &self,
            _visibility: &PathGraph,
            origin: Point3,
            destination: Point3,
        ) -> Out<PathGraph> {
            if self.dangling_path {
                return Ok(PathGraph {
                    kind: GraphKind::Base,
                    vertices: vec![origin],
                    edges: vec![(0, 5)],
                    boundary_count: 0,
                });
            }
            let corner = Point3::new(destination.x, origin.y, 0.0);
            Ok(PathGraph {
                kind: GraphKind::Base,
                vertices: vec![origin, corner, destination],
                edges: vec![(0, 1), (1, 2)],
                boundary_count: 0,
            })
        }
    }

    struct FailingBoolean;

    impl PolygonBoolean for FailingBoolean {
        type Error = Boom;

        fn union(&self, subject: &Polygon, _clip: &Polygon) -> Out<Vec<Polygon>> {
            Ok(vec![subject.clone()])
        }

        fn difference(&self, _s: &Polygon, _c: &Polygon) -> Out<Vec<Polygon>> {
            Err(Boom)
        }

        fn intersection(&self, _s: &Polygon, _c: &Polygon) -> Out<Vec<Polygon>> {
            Ok(Vec::new())
        }

        fn union_all(&self, s: &[Polygon], _c: &[Polygon]) -> Out<Vec<Polygon>> {
            Ok(s.to_vec())
        }

        fn difference_all(&self, _s: &[Polygon], _c: &[Polygon]) -> Out<Vec<Polygon>> {
            Err(Boom)
        }

        fn intersection_all(&self, _s: &[Polygon], _c: &[Polygon]) -> Out<Vec<Polygon>> {
            Ok(Vec::new())
        }
    }

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn shortest_path_length_is_sum_of_edges() {
        let delegate = Delegate::new(Complete::default());
        let vis = delegate.build(&[triangle()], &[], true).unwrap();
        assert_eq!(vis.edges.len(), 3);

        let path = delegate
            .shortest_path(&vis, Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0))
            .unwrap();
        assert!((path.length - 7.0).abs() < 1e-12);
    }

    #[test]
    fn shortest_path_needs_visibility_graph() {
        let base = PathGraph::from_polygons(&[triangle()], &[], 1e-6).unwrap();
        let delegate = Delegate::new(Complete::default());
        let err = delegate
            .shortest_path(&base, Point3::origin(), Point3::new(1.0, 1.0, 0.0))
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(delegate.vertex_visibility(&base, Point3::origin()).is_ok());
    }

    #[test]
    fn dangling_edge_from_collaborator_is_an_error() {
        let delegate = Delegate::new(Complete {
            dangling_path: true,
            ..Complete::default()
        });
        let vis = delegate.build(&[triangle()], &[], false).unwrap();
        let err = delegate
            .shortest_path(&vis, Point3::origin(), Point3::new(1.0, 1.0, 0.0))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn collaborator_failure_propagates_unchanged() {
        let base = PathGraph::from_polygons(&[triangle()], &[], 1e-6).unwrap();
        let err = Delegate::new(Complete {
            fail: true,
            ..Complete::default()
        })
        .visibility_graph(&base, false)
        .unwrap_err();
        assert!(matches!(err, WiregraphError::Delegation(_)));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "library exploded");
    }

    #[test]
    fn boolean_results_and_failures_pass_through() {
        let delegate = Delegate::new(FailingBoolean);
        let t = triangle();
        assert_eq!(delegate.union(&t, &t).unwrap(), vec![t.clone()]);
        assert!(delegate.intersection(&t, &t).unwrap().is_empty());
        assert_eq!(delegate.union_all(&[t.clone()], &[]).unwrap().len(), 1);
        assert!(delegate
            .intersection_all(&[t.clone()], &[t.clone()])
            .unwrap()
            .is_empty());
        assert!(matches!(
            delegate.difference(&t, &t).unwrap_err(),
            WiregraphError::Delegation(DelegationError::Failed {
                collaborator: "polygon difference",
                ..
            })
        ));
        assert!(delegate.difference_all(&[t.clone()], &[t]).is_err());
    }
}
