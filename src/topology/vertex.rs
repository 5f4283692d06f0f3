use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a canonical vertex.
    pub struct VertexId;
}

/// Data associated with a canonical vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Representative position: the first coordinate seen for this identity.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
