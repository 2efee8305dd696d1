//! # Mesh Errors
//!
//! Error types for mesh generation and repair operations.
//!
//! Validation never produces these: structural problems found by the
//! validator are reported in-band through its report.

use thiserror::Error;

/// Errors that can occur during mesh generation or repair.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A function input violates its contract (non-positive size, bad tolerance)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A face references a vertex that does not exist
    #[error("Face index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    /// A generator produced no vertices or no faces
    #[error("Empty geometry generated")]
    EmptyGeometry,

    /// Manifold/watertight analysis could not be performed
    #[error("Topology analysis unavailable: {message}")]
    TopologyUnavailable { message: String },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a topology unavailable error.
    pub fn topology_unavailable(message: impl Into<String>) -> Self {
        Self::TopologyUnavailable {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
