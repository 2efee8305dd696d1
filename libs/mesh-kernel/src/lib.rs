//! # Mesh Kernel
//!
//! Triangle mesh synthesis, analysis and repair.
//!
//! ## Architecture
//!
//! ```text
//! primitives (PrimitiveKind, size) → Mesh → validate / repair
//!                                      ↕
//!                                 MeshBuffers (flat f32 / i64 arrays)
//! ```
//!
//! ## Modules
//!
//! - **primitives**: cube, UV sphere, cylinder and pyramid generators
//! - **estimate**: bounding box, surface area and volume estimates
//! - **validate**: structural checks plus manifold/watertight flags
//! - **topology**: pluggable edge-adjacency analysis behind [`TopologyAnalyzer`]
//! - **repair**: vertex welding and degenerate face removal
//!
//! ## Usage
//!
//! ```rust
//! use mesh_kernel::{generate, repair_mesh, validate_mesh, PrimitiveKind};
//!
//! let mesh = generate(PrimitiveKind::Sphere, 1.0).unwrap();
//! let repaired = repair_mesh(&mesh).unwrap();
//! let report = validate_mesh(&repaired);
//! assert!(report.is_valid);
//! assert_eq!(report.stats.is_watertight, Some(true));
//! ```

pub mod buffers;
pub mod error;
pub mod estimate;
pub mod mesh;
pub mod primitives;
pub mod repair;
pub mod topology;
pub mod validate;

pub use buffers::MeshBuffers;
pub use error::{MeshError, MeshResult};
pub use estimate::BoundingBox;
pub use mesh::Mesh;
pub use primitives::{generate, PrimitiveKind};
pub use repair::{remove_degenerate_faces, repair_mesh, repair_mesh_with, weld_vertices};
pub use topology::{
    EdgeTopologyAnalyzer, TopologyAnalyzer, TopologyReport, UnavailableTopology,
};
pub use validate::{validate, validate_mesh, MeshStats, MeshValidator, ValidationReport};
