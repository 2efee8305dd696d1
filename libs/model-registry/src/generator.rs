//! # Generator Capability
//!
//! Anything that turns a prompt into a mesh can be registered with the
//! [`ModelRegistry`](crate::ModelRegistry) by implementing [`Generator`].
//!
//! ## Lifecycle
//!
//! ```text
//! registered → (load on first use) → loaded → unload → registered
//! ```

use crate::error::RegistryResult;
use crate::metadata::{GeneratedMesh, GenerationParams};

/// A named text-to-mesh generator.
pub trait Generator: Send + Sync {
    /// Whether the generator can run in this environment.
    fn is_available(&self) -> bool;

    /// Whether the generator's resources are in memory.
    fn is_loaded(&self) -> bool;

    /// Device the generator runs on.
    fn device(&self) -> &str {
        "cpu"
    }

    /// Brings the generator's resources into memory.
    fn load(&mut self) -> RegistryResult<()>;

    /// Releases the generator's resources.
    fn unload(&mut self);

    /// Generates a mesh for `prompt`.
    fn generate(&self, prompt: &str, params: &GenerationParams) -> RegistryResult<GeneratedMesh>;
}
