use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Segment};
use crate::math::Point3;
use crate::topology::VertexIndex;

/// What a [`PathGraph`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Polygon or segment edges as given.
    Base,
    /// Edges between mutually visible vertices.
    Visibility,
}

/// Plain vertex/edge graph exchanged with the path-planning collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGraph {
    pub kind: GraphKind,
    pub vertices: Vec<Point3>,
    /// Index pairs into `vertices`.
    pub edges: Vec<(usize, usize)>,
    /// Number of leading polygons in the source that are boundaries; the
    /// rest are internal obstacles.
    pub boundary_count: usize,
}

impl PathGraph {
    /// Builds a base graph from closed boundary polygons followed by
    /// internal obstacle polygons.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an invalid tolerance.
    pub fn from_polygons(
        boundaries: &[Polygon],
        internals: &[Polygon],
        tolerance: f64,
    ) -> Result<Self> {
        let segments: Vec<Segment> = boundaries
            .iter()
            .chain(internals)
            .flat_map(Polygon::edges)
            .collect();
        let mut graph = Self::from_segments(&segments, tolerance)?;
        graph.boundary_count = boundaries.len();
        Ok(graph)
    }

    /// Builds a base graph from segments, merging endpoints within `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an invalid tolerance and
    /// `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn from_segments(segments: &[Segment], tolerance: f64) -> Result<Self> {
        let mut index = VertexIndex::new(tolerance)?;
        let mut ids = Vec::with_capacity(segments.len());
        for s in segments {
            ids.push((index.canonicalize(s.start)?, index.canonicalize(s.end)?));
        }

        let mut dense = slotmap::SecondaryMap::new();
        let mut vertices = Vec::with_capacity(index.len());
        for id in index.ids() {
            dense.insert(id, vertices.len());
            vertices.push(index.vertex(id)?.point);
        }
        let edges = ids
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (dense[a], dense[b]))
            .collect();

        Ok(Self {
            kind: GraphKind::Base,
            vertices,
            edges,
            boundary_count: 0,
        })
    }

    /// Checks that every edge refers to an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the first edge with an
    /// out-of-range vertex index.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertices.len();
        let bad = self.edges.iter().enumerate().find(|(_, e)| e.0 >= n || e.1 >= n);
        if let Some((i, &(a, b))) = bad {
            return Err(OperationError::InvalidInput(format!(
                "edge {i} ({a}, {b}) refers past the {n} vertices of the graph"
            ))
            .into());
        }
        Ok(())
    }

    /// Edges as segments. Edges failing [`PathGraph::validate`] are skipped.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges.iter().filter_map(|&(a, b)| {
            Some(Segment::new(*self.vertices.get(a)?, *self.vertices.get(b)?))
        })
    }

    /// Sum of edge lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segments().map(|s| (s.end - s.start).norm()).sum()
    }
}
