use thiserror::Error;

/// Top-level error type for wiregraph.
#[derive(Debug, Error)]
pub enum WiregraphError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Delegation(#[from] DelegationError),
}

/// Errors related to geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite {axis} coordinate: {value}")]
    NonFinite { axis: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the incidence graph and chain traversal.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("ambiguous incidence at vertex ({x}, {y}, {z}): duplicate segment references")]
    AmbiguousIncidence { x: f64, y: f64, z: f64 },
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failures raised by an external collaborator, passed through untouched.
#[derive(Debug, Error)]
pub enum DelegationError {
    #[error("{collaborator} failed")]
    Failed {
        collaborator: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl WiregraphError {
    /// Returns `true` for rejected caller input (too few segments, degenerate
    /// segments, invalid options).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Operation(OperationError::InvalidInput(_)))
    }
}

/// Convenience type alias for results using [`WiregraphError`].
pub type Result<T> = std::result::Result<T, WiregraphError>;
