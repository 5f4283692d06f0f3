use petgraph::unionfind::UnionFind;
use slotmap::{SecondaryMap, SlotMap};
use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::math::Point3;

use super::edge::{EdgeData, EdgeId};
use super::vertex::{VertexData, VertexId};
use super::vertex_index::VertexIndex;

/// Maps each canonical vertex to the edges touching it.
///
/// Built once per input batch and not mutated afterwards. Degree 1 marks a
/// terminus, degree 2 a pass-through and degree > 2 a branch vertex.
/// Structurally duplicate edges are kept as separate entries.
#[derive(Debug)]
pub struct IncidenceGraph {
    index: VertexIndex,
    edges: SlotMap<EdgeId, EdgeData>,
    incidence: SecondaryMap<VertexId, Vec<EdgeId>>,
    degenerate: Vec<EdgeId>,
}

impl IncidenceGraph {
    /// Builds the graph from endpoint pairs; the pair's position in the
    /// iterator becomes the edge's `source`.
    ///
    /// An edge whose endpoints share an identity is recorded once at that
    /// vertex and listed in [`IncidenceGraph::degenerate_edges`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an invalid tolerance and
    /// `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn build<I>(endpoints: I, tolerance: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (Point3, Point3)>,
    {
        let mut graph = Self {
            index: VertexIndex::new(tolerance)?,
            edges: SlotMap::with_key(),
            incidence: SecondaryMap::new(),
            degenerate: Vec::new(),
        };

        for (source, (start, end)) in endpoints.into_iter().enumerate() {
            graph.insert(start, end, source)?;
        }

        debug!(
            edges = graph.edges.len(),
            vertices = graph.index.len(),
            branches = graph.branch_count(),
            degenerate = graph.degenerate.len(),
            tolerance,
            "built incidence graph"
        );
        Ok(graph)
    }

    fn insert(&mut self, start: Point3, end: Point3, source: usize) -> Result<()> {
        let start = self.index.canonicalize(start)?;
        let end = self.index.canonicalize(end)?;
        let data = EdgeData { start, end, source };
        let id = self.edges.insert(data);

        self.push_incidence(start, id);
        if data.is_degenerate() {
            self.degenerate.push(id);
        } else {
            self.push_incidence(end, id);
        }
        Ok(())
    }

    fn push_incidence(&mut self, vertex: VertexId, edge: EdgeId) {
        if let Some(list) = self.incidence.get_mut(vertex) {
            list.push(edge);
        } else {
            self.incidence.insert(vertex, vec![edge]);
        }
    }

    /// Returns the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if the vertex is not in the graph.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        self.index.vertex(id)
    }

    /// Returns the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if the edge is not in the graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()).into())
    }

    /// Edges incident to `vertex`, in insertion order.
    #[must_use]
    pub fn incident(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges incident to `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incident(vertex).len()
    }

    /// Returns `true` for a vertex with more than two incident edges.
    #[must_use]
    pub fn is_branch(&self, vertex: VertexId) -> bool {
        self.degree(vertex) > 2
    }

    /// Number of branch vertices.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.vertex_ids().filter(|&v| self.is_branch(v)).count()
    }

    /// Iterates vertex identities in the order they were first seen.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.index.ids()
    }

    /// Iterates edges in input order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys()
    }

    /// Number of distinct vertex identities.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges whose two endpoints canonicalized to the same identity.
    #[must_use]
    pub fn degenerate_edges(&self) -> &[EdgeId] {
        &self.degenerate
    }

    /// Tolerance used for vertex identity.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.index.tolerance()
    }

    /// Partitions vertices into connected components.
    ///
    /// Components are ordered by their earliest vertex and list their
    /// vertices in first-seen order. No two components share a vertex.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut dense: SecondaryMap<VertexId, usize> = SecondaryMap::new();
        for (i, v) in self.vertex_ids().enumerate() {
            dense.insert(v, i);
        }

        let mut sets = UnionFind::<usize>::new(dense.len());
        for edge in self.edges.values() {
            if let (Some(&a), Some(&b)) = (dense.get(edge.start), dense.get(edge.end)) {
                sets.union(a, b);
            }
        }

        let mut slot_of_root: Vec<Option<usize>> = vec![None; dense.len()];
        let mut components: Vec<Vec<VertexId>> = Vec::new();
        for (i, v) in self.vertex_ids().enumerate() {
            let root = sets.find_mut(i);
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(v);
        }
        components
    }
}
