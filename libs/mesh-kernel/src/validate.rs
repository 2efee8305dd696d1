//! # Mesh Validation
//!
//! Structural checks and statistics for arbitrary vertex/face arrays.
//!
//! ## Policy
//!
//! Validation never fails. Every problem is recorded in the returned
//! [`ValidationReport`]: structural problems as errors (which clear
//! `is_valid`), topology findings and analysis failures as warnings (which
//! do not).
//!
//! ## Checks
//!
//! All structural checks run, so a single pass surfaces every problem:
//!
//! 1. vertex buffer shape is (N, 3)
//! 2. index buffer shape is (M, 3)
//! 3. N > 0 and M > 0
//! 4. no index >= N
//! 5. no index < 0

use crate::buffers::MeshBuffers;
use crate::estimate::{self, BoundingBox};
use crate::mesh::Mesh;
use crate::topology::{EdgeTopologyAnalyzer, TopologyAnalyzer};
use config::constants::GlobalConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Error for a vertex buffer that is not (N, 3).
pub const INVALID_VERTEX_SHAPE: &str = "Invalid vertex shape";
/// Error for an index buffer that is not (M, 3).
pub const INVALID_FACE_SHAPE: &str = "Invalid face shape";
/// Error for a mesh without vertices.
pub const NO_VERTICES: &str = "No vertices found";
/// Error for a mesh without faces.
pub const NO_FACES: &str = "No faces found";
/// Error for indices past the end of the vertex buffer.
pub const INDEX_EXCEEDS_VERTEX_COUNT: &str = "Face indices exceed vertex count";
/// Error for negative indices.
pub const NEGATIVE_INDEX: &str = "Negative face indices found";
/// Warning when the mesh is not manifold.
pub const NOT_MANIFOLD: &str = "Mesh is not manifold";
/// Warning when the mesh has boundary edges.
pub const NOT_WATERTIGHT: &str = "Mesh is not watertight";

/// Statistics gathered during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Number of complete vertex rows.
    pub vertex_count: usize,
    /// Number of complete face rows.
    pub face_count: usize,
    /// Bounding box; all zero when structural checks failed.
    pub bounding_box: BoundingBox,
    /// Total triangle area; zero when structural checks failed.
    pub surface_area: f64,
    /// Divergence theorem volume estimate; zero when structural checks failed.
    pub volume: f64,
    /// Manifold flag, absent when topology analysis did not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manifold: Option<bool>,
    /// Watertight flag, absent when topology analysis did not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_watertight: Option<bool>,
}

/// Outcome of validating a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False when any structural check failed.
    pub is_valid: bool,
    /// Structural problems, in check order.
    pub errors: Vec<String>,
    /// Advisory findings.
    pub warnings: Vec<String>,
    /// Counts and geometric estimates.
    pub stats: MeshStats,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: MeshStats::default(),
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// True when the report carries an error starting with `prefix`.
    pub fn has_error(&self, prefix: &str) -> bool {
        self.errors.iter().any(|e| e.starts_with(prefix))
    }

    /// True when the report carries a warning starting with `prefix`.
    pub fn has_warning(&self, prefix: &str) -> bool {
        self.warnings.iter().any(|w| w.starts_with(prefix))
    }
}

/// Validates meshes, delegating topology to a [`TopologyAnalyzer`].
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::{generate, PrimitiveKind};
/// use mesh_kernel::validate::MeshValidator;
///
/// let cube = generate(PrimitiveKind::Cube, 1.0).unwrap();
/// let report = MeshValidator::new().validate_mesh(&cube);
/// assert!(report.is_valid);
/// assert_eq!(report.stats.vertex_count, 8);
/// assert_eq!(report.stats.is_watertight, Some(true));
/// ```
pub struct MeshValidator {
    analyzer: Box<dyn TopologyAnalyzer>,
}

impl MeshValidator {
    /// Creates a validator using edge-adjacency topology analysis.
    pub fn new() -> Self {
        Self::with_analyzer(EdgeTopologyAnalyzer::default())
    }

    /// Creates a validator whose topology analysis uses `config`.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::with_analyzer(EdgeTopologyAnalyzer::from_config(config))
    }

    /// Creates a validator with a custom topology capability.
    pub fn with_analyzer(analyzer: impl TopologyAnalyzer + 'static) -> Self {
        Self {
            analyzer: Box::new(analyzer),
        }
    }

    /// Validates a typed mesh.
    pub fn validate_mesh(&self, mesh: &Mesh) -> ValidationReport {
        self.validate(&MeshBuffers::from(mesh))
    }

    /// Validates raw buffers. Always returns a report.
    pub fn validate(&self, buffers: &MeshBuffers) -> ValidationReport {
        let mut report = ValidationReport::new();
        let vertex_count = buffers.vertex_count();
        let face_count = buffers.face_count();
        report.stats.vertex_count = vertex_count;
        report.stats.face_count = face_count;

        if !buffers.has_vertex_shape() {
            report.error(format!(
                "{INVALID_VERTEX_SHAPE}: {} values is not a multiple of 3",
                buffers.vertices.len()
            ));
        }
        if !buffers.has_face_shape() {
            report.error(format!(
                "{INVALID_FACE_SHAPE}: {} indices is not a multiple of 3",
                buffers.indices.len()
            ));
        }
        if vertex_count == 0 {
            report.error(NO_VERTICES);
        }
        if face_count == 0 {
            report.error(NO_FACES);
        }
        if buffers.indices.iter().any(|&i| i >= vertex_count as i64) {
            report.error(INDEX_EXCEEDS_VERTEX_COUNT);
        }
        if buffers.indices.iter().any(|&i| i < 0) {
            report.error(NEGATIVE_INDEX);
        }

        if !report.is_valid {
            tracing::debug!(errors = ?report.errors, "mesh failed structural validation");
            return report;
        }

        // Structural checks passed: every index fits in [0, vertex_count)
        let mesh = to_mesh(buffers);
        report.stats.bounding_box = estimate::bounding_box(mesh.vertices());
        report.stats.surface_area = estimate::surface_area(mesh.vertices(), mesh.faces());
        report.stats.volume = estimate::volume(mesh.vertices(), mesh.faces());

        match self.analyzer.analyze(&mesh) {
            Ok(topology) => {
                report.stats.is_manifold = Some(topology.is_manifold);
                report.stats.is_watertight = Some(topology.is_watertight);
                if !topology.is_manifold {
                    report.warning(NOT_MANIFOLD);
                }
                if !topology.is_watertight {
                    report.warning(NOT_WATERTIGHT);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "topology analysis failed");
                report.warning(format!("Advanced validation failed: {e}"));
            }
        }

        report
    }
}

impl Default for MeshValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MeshValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshValidator").finish_non_exhaustive()
    }
}

/// Validates raw buffers with the default validator.
pub fn validate(buffers: &MeshBuffers) -> ValidationReport {
    MeshValidator::new().validate(buffers)
}

/// Validates a typed mesh with the default validator.
pub fn validate_mesh(mesh: &Mesh) -> ValidationReport {
    MeshValidator::new().validate_mesh(mesh)
}

/// Converts structurally valid buffers into a mesh.
fn to_mesh(buffers: &MeshBuffers) -> Mesh {
    let vertices = buffers
        .vertices
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .collect();
    let faces = buffers
        .indices
        .chunks_exact(3)
        .map(|c| [c[0] as u32, c[1] as u32, c[2] as u32])
        .collect();
    Mesh::from_parts(vertices, faces)
}
