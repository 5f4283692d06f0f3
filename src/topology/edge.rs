use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the incidence graph.
    pub struct EdgeId;
}

/// Data associated with an edge: its two canonical endpoints and the
/// position of the primitive it came from in the caller's input.
#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// Index of the originating segment or curve in the input sequence.
    pub source: usize,
}

impl EdgeData {
    /// Returns `true` when both endpoints share one identity.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the endpoint opposite to `from`.
    ///
    /// For a degenerate edge this is `from` itself.
    #[must_use]
    pub fn other(&self, from: VertexId) -> VertexId {
        if self.start == from {
            self.end
        } else {
            self.start
        }
    }
}
