//! # Model Registry
//!
//! Named text-to-mesh generators for the shape kernel.
//!
//! ## Architecture
//!
//! ```text
//! ModelRegistry::generate(name, prompt, params)
//!     → Generator::generate        (demo: prompt → ShapeHint → primitive)
//!     → GeneratedMesh::postprocess (counts, bounding box, volume)
//!     → provenance stamped         (model_used, prompt, generation_params)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use model_registry::{GenerationParams, ModelRegistry};
//!
//! let registry = ModelRegistry::with_defaults();
//! let result = registry.generate("demo", "small pyramid", &GenerationParams::new()).unwrap();
//! assert_eq!(result.metadata.face_count, 6);
//! ```

pub mod demo;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod prompt;
pub mod registry;

pub use demo::DemoModel;
pub use descriptor::{ModelDescriptor, ModelStatus, RegistryStats};
pub use error::{RegistryError, RegistryResult};
pub use generator::Generator;
pub use metadata::{GeneratedMesh, GenerationMetadata, GenerationParams};
pub use prompt::{preprocess_prompt, ShapeHint};
pub use registry::ModelRegistry;
