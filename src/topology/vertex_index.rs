//! Tolerance-bucketed vertex canonicalization.
//!
//! Space is divided into a grid with cell size equal to the tolerance, so
//! any coordinate within tolerance of a representative lies in the same or
//! an adjacent cell. Lookups check the 3x3x3 neighborhood only.

use hashbrown::HashMap;
use slotmap::SlotMap;

use crate::error::{OperationError, Result, TopologyError};
use crate::math::{almost_equal, ensure_finite, Point3};

use super::vertex::{VertexData, VertexId};

type Cell = (i64, i64, i64);

/// Maps coordinates to canonical vertex identities.
///
/// Two coordinates share an identity when every axis differs by at most the
/// tolerance from the same representative. The first coordinate seen for an
/// identity becomes its representative.
#[derive(Debug)]
pub struct VertexIndex {
    vertices: SlotMap<VertexId, VertexData>,
    cells: HashMap<Cell, Vec<VertexId>>,
    tolerance: f64,
}

impl VertexIndex {
    /// Creates an empty index.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless `tolerance` is finite and positive.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "vertex tolerance must be finite and positive, got {tolerance}"
            ))
            .into());
        }
        Ok(Self {
            vertices: SlotMap::with_key(),
            cells: HashMap::new(),
            tolerance,
        })
    }

    /// Returns the tolerance the index was built with.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Map a point to its grid cell indices.
    #[inline]
    fn cell_coords(&self, p: &Point3) -> Cell {
        #[allow(clippy::cast_possible_truncation)]
        let discretize = |v: f64| (v / self.tolerance).floor() as i64;
        (discretize(p.x), discretize(p.y), discretize(p.z))
    }

    /// Returns the identity `point` canonicalizes to, if one exists.
    ///
    /// When several representatives are within tolerance, the closest one
    /// wins, then the earliest inserted.
    #[must_use]
    pub fn find(&self, point: &Point3) -> Option<VertexId> {
        let (cx, cy, cz) = self.cell_coords(point);
        let mut best: Option<(f64, VertexId)> = None;

        // Check 3x3x3 neighborhood
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    // Cells saturate at the i64 range for huge coordinates.
                    let cell = (
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    );
                    let Some(ids) = self.cells.get(&cell) else {
                        continue;
                    };
                    for &id in ids {
                        let rep = &self.vertices[id].point;
                        if !almost_equal(rep, point, self.tolerance) {
                            continue;
                        }
                        let dist = (rep - point).amax();
                        let better = match best {
                            None => true,
                            Some((bd, bid)) => dist.total_cmp(&bd).then(id.cmp(&bid)).is_lt(),
                        };
                        if better {
                            best = Some((dist, id));
                        }
                    }
                }
            }
        }

        best.map(|(_, id)| id)
    }

    /// Canonicalizes `point`, creating a new identity if none matches.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn canonicalize(&mut self, point: Point3) -> Result<VertexId> {
        ensure_finite(&point)?;
        if let Some(id) = self.find(&point) {
            return Ok(id);
        }
        let id = self.vertices.insert(VertexData::new(point));
        self.cells
            .entry(self.cell_coords(&point))
            .or_default()
            .push(id);
        Ok(id)
    }

    /// Returns the vertex data, or an error if the key is stale.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if the vertex does not exist.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()).into())
    }

    /// Iterates identities in creation order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    /// Number of distinct identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex has been canonicalized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
