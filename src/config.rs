use crate::error::{OperationError, Result};
use crate::math::VERTEX_TOLERANCE;

/// Options shared by the reconstruction operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructOptions {
    /// Absolute per-axis distance under which two coordinates are the same vertex.
    pub tolerance: f64,
    /// Assemble connected components concurrently. Only honored when the
    /// crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            tolerance: VERTEX_TOLERANCE,
            parallel: false,
        }
    }
}

impl ReconstructOptions {
    /// Creates options with the default tolerance, sequential assembly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Requests component-parallel assembly.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the options before any work is done.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless the tolerance is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tolerance must be finite and positive, got {}",
                self.tolerance
            ))
            .into());
        }
        Ok(())
    }
}
