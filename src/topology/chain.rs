use hashbrown::HashSet;

use crate::error::{Result, TopologyError};

use super::edge::EdgeId;
use super::incidence::IncidenceGraph;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an assembled chain.
    pub struct ChainId;
}

/// An edge with orientation information within a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    /// The edge identifier.
    pub edge: EdgeId,
    /// If `true`, the edge is traversed in its natural direction (start → end).
    /// If `false`, the edge is traversed in reverse (end → start).
    pub forward: bool,
}

impl OrientedEdge {
    /// Creates a new oriented edge.
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }

    /// Returns the same edge traversed the other way.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self::new(self.edge, !self.forward)
    }

    /// Vertex this traversal leaves from.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if the edge is not in `graph`.
    pub fn tail(&self, graph: &IncidenceGraph) -> Result<VertexId> {
        let data = graph.edge(self.edge)?;
        Ok(if self.forward { data.start } else { data.end })
    }

    /// Vertex this traversal arrives at.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if the edge is not in `graph`.
    pub fn head(&self, graph: &IncidenceGraph) -> Result<VertexId> {
        let data = graph.edge(self.edge)?;
        Ok(if self.forward { data.end } else { data.start })
    }
}

/// A maximal run of edges connected end to end without crossing a branch
/// vertex, stored in path order.
#[derive(Debug, Clone)]
pub struct ChainData {
    /// The ordered sequence of oriented edges.
    pub edges: Vec<OrientedEdge>,
    /// Whether the last edge arrives where the first one leaves.
    pub is_closed: bool,
}

impl ChainData {
    /// Builds a chain from path-ordered edges, deriving the closed flag.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if an edge is not in `graph`.
    pub fn new(edges: Vec<OrientedEdge>, graph: &IncidenceGraph) -> Result<Self> {
        let is_closed = match (edges.first(), edges.last()) {
            (Some(first), Some(last)) => first.tail(graph)? == last.head(graph)?,
            _ => false,
        };
        Ok(Self { edges, is_closed })
    }

    /// Number of edges in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the chain has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertices visited in path order, including both ends.
    ///
    /// A closed chain repeats its first vertex at the end.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` for an empty chain or an edge
    /// missing from `graph`.
    pub fn vertex_sequence(&self, graph: &IncidenceGraph) -> Result<Vec<VertexId>> {
        let first = self
            .edges
            .first()
            .ok_or_else(|| TopologyError::EntityNotFound("chain edge".into()))?;
        let mut sequence = Vec::with_capacity(self.edges.len() + 1);
        sequence.push(first.tail(graph)?);
        for oriented in &self.edges {
            sequence.push(oriented.head(graph)?);
        }
        Ok(sequence)
    }

    /// Number of distinct vertex identities the chain touches.
    ///
    /// # Errors
    ///
    /// Same as [`ChainData::vertex_sequence`].
    pub fn distinct_vertex_count(&self, graph: &IncidenceGraph) -> Result<usize> {
        let distinct: HashSet<VertexId> = self.vertex_sequence(graph)?.into_iter().collect();
        Ok(distinct.len())
    }

    /// Input positions of the chain's edges, in path order.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if an edge is not in `graph`.
    pub fn sources(&self, graph: &IncidenceGraph) -> Result<Vec<usize>> {
        self.edges
            .iter()
            .map(|oriented| Ok(graph.edge(oriented.edge)?.source))
            .collect()
    }
}
