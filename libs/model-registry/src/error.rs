//! # Registry Errors

use mesh_kernel::MeshError;
use thiserror::Error;

/// Errors returned by the registry and its generators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// No generator is registered under this name
    #[error("Model '{0}' not found")]
    NotFound(String),

    /// The generator reports that it cannot run
    #[error("Model '{0}' is not available")]
    Unavailable(String),

    /// Prompt or parameters rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lazy loading did not succeed
    #[error("Failed to load model: {0}")]
    LoadFailed(String),

    /// Geometry generation failed
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
