use slotmap::{SecondaryMap, SlotMap};
use tracing::{debug, trace};

use crate::error::{Result, TopologyError};
use crate::topology::{ChainData, ChainId, EdgeId, IncidenceGraph, OrientedEdge, VertexId};

/// Partitions the edges of an incidence graph into maximal chains.
///
/// Every non-branch vertex not yet visited seeds a chain; from the seed the
/// walk follows each incident edge through pass-through vertices and stops
/// at a terminus, a branch vertex, or on returning to a visited vertex.
/// Branch vertices are never seeds and never walked through, so chains only
/// meet at them. Edges joining two branch vertices become single-edge chains.
#[derive(Debug)]
pub struct ChainAssembler<'a> {
    graph: &'a IncidenceGraph,
    parallel: bool,
}

/// Traversal state scoped to one assembly run.
#[derive(Debug, Default)]
struct WalkState {
    visited: SecondaryMap<VertexId, ()>,
    consumed: SecondaryMap<EdgeId, ()>,
}

impl<'a> ChainAssembler<'a> {
    /// Creates an assembler over `graph`.
    #[must_use]
    pub fn new(graph: &'a IncidenceGraph) -> Self {
        Self {
            graph,
            parallel: false,
        }
    }

    /// Assembles connected components concurrently when the `parallel`
    /// feature is enabled. The partition is identical either way; only
    /// chain order differs.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the assembly.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::AmbiguousIncidence` when a pass-through vertex
    /// offers no edge other than the one just traversed.
    pub fn execute(&self) -> Result<SlotMap<ChainId, ChainData>> {
        let mut chains = if self.parallel {
            self.assemble_components()?
        } else {
            assemble_from_seeds(self.graph, self.graph.vertex_ids())?
        };

        let mut used: SecondaryMap<EdgeId, ()> = SecondaryMap::new();
        for chain in &chains {
            for oriented in &chain.edges {
                used.insert(oriented.edge, ());
            }
        }
        for edge in self.graph.edge_ids() {
            if !used.contains_key(edge) {
                trace!(?edge, "edge between branch vertices");
                chains.push(ChainData::new(vec![OrientedEdge::new(edge, true)], self.graph)?);
            }
        }

        let mut arena = SlotMap::with_capacity_and_key(chains.len());
        for chain in chains {
            arena.insert(chain);
        }
        debug!(
            chains = arena.len(),
            edges = self.graph.edge_count(),
            parallel = self.parallel,
            "assembled chains"
        );
        Ok(arena)
    }

    #[cfg(feature = "parallel")]
    fn assemble_components(&self) -> Result<Vec<ChainData>> {
        use rayon::prelude::*;

        let components = self.graph.components();
        let per_component = components
            .par_iter()
            .map(|vertices| assemble_from_seeds(self.graph, vertices.iter().copied()))
            .collect::<Result<Vec<_>>>()?;
        Ok(per_component.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "parallel"))]
    fn assemble_components(&self) -> Result<Vec<ChainData>> {
        assemble_from_seeds(self.graph, self.graph.vertex_ids())
    }
}

/// Runs the seed pass over `seeds` with fresh traversal state.
fn assemble_from_seeds<I>(graph: &IncidenceGraph, seeds: I) -> Result<Vec<ChainData>>
where
    I: IntoIterator<Item = VertexId>,
{
    let mut state = WalkState::default();
    let mut chains = Vec::new();

    for seed in seeds {
        if state.visited.contains_key(seed) || graph.is_branch(seed) {
            continue;
        }
        state.visited.insert(seed, ());

        let mut sides: Vec<Vec<OrientedEdge>> = Vec::with_capacity(2);
        for &edge in graph.incident(seed) {
            let side = walk(graph, &mut state, seed, edge)?;
            if !side.is_empty() {
                sides.push(side);
            }
        }

        let path = join_sides(sides);
        if path.is_empty() {
            continue;
        }
        trace!(?seed, edges = path.len(), "chain from seed");
        chains.push(ChainData::new(path, graph)?);
    }

    Ok(chains)
}

/// Follows edges away from `seed` starting with `first`.
fn walk(
    graph: &IncidenceGraph,
    state: &mut WalkState,
    seed: VertexId,
    first: EdgeId,
) -> Result<Vec<OrientedEdge>> {
    let mut side = Vec::new();
    let mut current = first;
    let mut from = seed;

    loop {
        if state.consumed.insert(current, ()).is_some() {
            break;
        }
        let data = graph.edge(current)?;
        side.push(OrientedEdge::new(current, data.start == from));

        let next = data.other(from);
        if graph.is_branch(next) {
            break;
        }
        // Already visited: the loop closed on the seed.
        if state.visited.insert(next, ()).is_some() {
            break;
        }
        if graph.degree(next) < 2 {
            break;
        }
        current = other_incident(graph, next, current)?;
        from = next;
    }

    Ok(side)
}

/// Picks the edge at a pass-through vertex that is not `arrived_by`,
/// comparing edge identity rather than endpoints.
///
/// `walk` only calls this at vertices of degree 2 or more, and an incidence
/// list never holds the same edge twice, so the error means the graph and
/// the walk disagree about the vertex.
fn other_incident(
    graph: &IncidenceGraph,
    vertex: VertexId,
    arrived_by: EdgeId,
) -> Result<EdgeId> {
    if let Some(&edge) = graph.incident(vertex).iter().find(|&&e| e != arrived_by) {
        return Ok(edge);
    }
    let p = graph.vertex(vertex)?.point;
    Err(TopologyError::AmbiguousIncidence {
        x: p.x,
        y: p.y,
        z: p.z,
    }
    .into())
}

/// Joins the walks leaving a seed into one path-ordered chain.
///
/// With two sides the first is reversed so the path runs through the seed.
fn join_sides(mut sides: Vec<Vec<OrientedEdge>>) -> Vec<OrientedEdge> {
    match sides.len() {
        0 => Vec::new(),
        1 => sides.swap_remove(0),
        _ => {
            let second = sides.swap_remove(1);
            let first = sides.swap_remove(0);
            first
                .into_iter()
                .rev()
                .map(OrientedEdge::flipped)
                .chain(second)
                .collect()
        }
    }
}
