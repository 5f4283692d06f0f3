mod assemble;
mod classify;

pub use assemble::ChainAssembler;
pub use classify::{Classified, PolygonClassifier};

use slotmap::SlotMap;
use tracing::debug;

use crate::config::ReconstructOptions;
use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Polyline, Segment};
use crate::math::Point3;
use crate::topology::{ChainData, ChainId, IncidenceGraph};

/// A reconstructed shape together with the input indices it was built from,
/// in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled<T> {
    pub shape: T,
    pub segments: Vec<usize>,
}

/// Output buckets of [`BuildPolygons`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconstruction {
    /// Closed loops through at least 3 distinct vertices.
    pub polygons: Vec<Assembled<Polygon>>,
    /// Open chains of at least 2 segments.
    pub polylines: Vec<Assembled<Polyline>>,
    /// Segments that did not join any chain, as given by the caller.
    pub isolated: Vec<Assembled<Segment>>,
}

impl Reconstruction {
    /// Every segment not part of a polygon: polylines exploded into their
    /// segments, followed by the isolated ones.
    #[must_use]
    pub fn ungrouped_segments(&self) -> Vec<Segment> {
        self.polylines
            .iter()
            .flat_map(|p| p.shape.segments())
            .chain(self.isolated.iter().map(|s| s.shape))
            .collect()
    }
}

/// Reconstructs polygons, polylines and isolated segments from an unordered
/// set of straight segments.
#[derive(Debug, Clone)]
pub struct BuildPolygons {
    segments: Vec<Segment>,
    options: ReconstructOptions,
}

impl BuildPolygons {
    /// Creates a new reconstruction with default options.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            options: ReconstructOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: ReconstructOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the reconstruction.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for fewer than 2 segments, a
    /// segment whose endpoints coincide within tolerance, or invalid options;
    /// `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn execute(&self) -> Result<Reconstruction> {
        let endpoints = self.segments.iter().map(|s| (s.start, s.end));
        let (graph, chains) = assemble_chains(endpoints, self.segments.len(), &self.options)?;

        let classifier = PolygonClassifier::new(&graph);
        let mut out = Reconstruction::default();
        for chain in chains.values() {
            let segments = chain.sources(&graph)?;
            match classifier.classify(chain)? {
                Classified::Polygon(shape) => out.polygons.push(Assembled { shape, segments }),
                Classified::Polyline(shape) => out.polylines.push(Assembled { shape, segments }),
                Classified::Isolated(edge) => {
                    let source = graph.edge(edge)?.source;
                    out.isolated.push(Assembled {
                        shape: self.segments[source],
                        segments,
                    });
                }
            }
        }

        debug!(
            polygons = out.polygons.len(),
            polylines = out.polylines.len(),
            isolated = out.isolated.len(),
            "reconstruction finished"
        );
        Ok(out)
    }
}

/// Validates a batch, builds its incidence graph and assembles its chains.
///
/// Shared by every operation that partitions primitives by shared endpoints.
pub(crate) fn assemble_chains<I>(
    endpoints: I,
    count: usize,
    options: &ReconstructOptions,
) -> Result<(IncidenceGraph, SlotMap<ChainId, ChainData>)>
where
    I: IntoIterator<Item = (Point3, Point3)>,
{
    options.validate()?;
    if count < 2 {
        return Err(OperationError::InvalidInput(format!(
            "at least 2 segments required, got {count}"
        ))
        .into());
    }

    let graph = IncidenceGraph::build(endpoints, options.tolerance)?;
    if let Some(&edge) = graph.degenerate_edges().first() {
        let source = graph.edge(edge)?.source;
        return Err(OperationError::InvalidInput(format!(
            "segment {source} is degenerate: endpoints coincide within {}",
            options.tolerance
        ))
        .into());
    }

    let chains = ChainAssembler::new(&graph)
        .with_parallel(options.parallel)
        .execute()?;
    Ok((graph, chains))
}
