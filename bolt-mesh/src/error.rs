//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur during bolt mesh generation.
///
/// Every error is raised before the first node is emitted; a build either
/// fully succeeds or produces nothing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeshError {
    /// A required dimension is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending parameter.
        name: &'static str,
        /// The provided value.
        value: f64,
    },

    /// The optional thread length is negative.
    #[error("thread length must be non-negative, got {0}")]
    InvalidThreadLength(f64),

    /// The build would exceed the caller-imposed node budget.
    #[error("node budget exceeded: build requires {required} nodes, budget is {budget}")]
    NodeBudgetExceeded {
        /// The caller-imposed budget.
        budget: usize,
        /// Nodes the build would produce.
        required: usize,
    },

    /// The build would overflow the 32-bit node id space.
    #[error("mesh too large: build requires {required} nodes")]
    MeshTooLarge {
        /// Nodes the build would produce.
        required: usize,
    },
}
