//! # Generation Metadata
//!
//! Statistics and provenance attached to every generated mesh.

use crate::error::RegistryResult;
use mesh_kernel::{estimate, repair_mesh, BoundingBox, Mesh, MeshError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form generation parameters, recorded verbatim in the metadata.
pub type GenerationParams = BTreeMap<String, serde_json::Value>;

/// Metadata describing a generated mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub vertex_count: usize,
    pub face_count: usize,
    pub bounding_box: BoundingBox,
    pub volume_estimate: f64,
    /// Shape the generator settled on, e.g. "sphere".
    pub shape_type: String,
    /// How the geometry was produced, e.g. "demo".
    pub generation_method: String,
    /// Registry name of the generator; set by the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    /// Prompt as supplied by the caller; set by the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default)]
    pub generation_params: GenerationParams,
}

/// A mesh together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMesh {
    pub mesh: Mesh,
    pub metadata: GenerationMetadata,
}

impl GeneratedMesh {
    /// Wraps freshly generated geometry, computing its statistics.
    ///
    /// # Errors
    ///
    /// `EmptyGeometry` if the mesh has no vertices or no faces, or
    /// `IndexOutOfBounds` if a face points past the vertex buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_kernel::{generate, PrimitiveKind};
    /// use model_registry::GeneratedMesh;
    ///
    /// let mesh = generate(PrimitiveKind::Cube, 2.0).unwrap();
    /// let generated = GeneratedMesh::postprocess(mesh, "cube", "demo").unwrap();
    /// assert_eq!(generated.metadata.vertex_count, 8);
    /// assert_eq!(generated.metadata.bounding_box.size, [2.0, 2.0, 2.0]);
    /// ```
    pub fn postprocess(
        mesh: Mesh,
        shape_type: impl Into<String>,
        generation_method: impl Into<String>,
    ) -> RegistryResult<Self> {
        if mesh.is_empty() {
            return Err(MeshError::EmptyGeometry.into());
        }
        mesh.check_indices()?;

        let metadata = GenerationMetadata {
            vertex_count: mesh.vertex_count(),
            face_count: mesh.face_count(),
            bounding_box: mesh.bounding_box(),
            volume_estimate: estimate::volume(mesh.vertices(), mesh.faces()),
            shape_type: shape_type.into(),
            generation_method: generation_method.into(),
            model_used: None,
            prompt: None,
            generation_params: GenerationParams::new(),
        };

        Ok(Self { mesh, metadata })
    }

    /// Welds duplicate vertices and drops degenerate faces, refreshing the
    /// counts and estimates. Provenance fields are kept.
    pub fn repaired(&self) -> RegistryResult<Self> {
        let mesh = repair_mesh(&self.mesh)?;
        let mut metadata = self.metadata.clone();
        metadata.vertex_count = mesh.vertex_count();
        metadata.face_count = mesh.face_count();
        metadata.bounding_box = mesh.bounding_box();
        metadata.volume_estimate = estimate::volume(mesh.vertices(), mesh.faces());
        Ok(Self { mesh, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use approx::assert_relative_eq;
    use mesh_kernel::{generate, PrimitiveKind};

    #[test]
    fn test_postprocess_rejects_empty() {
        let err = GeneratedMesh::postprocess(Mesh::new(), "cube", "demo").unwrap_err();
        assert_eq!(err, RegistryError::Mesh(MeshError::EmptyGeometry));
    }

    #[test]
    fn test_postprocess_rejects_bad_index() {
        let mesh = Mesh::from_parts(vec![glam::Vec3::ZERO; 3], vec![[0, 1, 3]]);
        let err = GeneratedMesh::postprocess(mesh, "cube", "demo").unwrap_err();
        assert!(matches!(err, RegistryError::Mesh(MeshError::IndexOutOfBounds { .. })));
    }

    #[test]
    fn test_postprocess_stats() {
        let mesh = generate(PrimitiveKind::Pyramid, 3.0).unwrap();
        let generated = GeneratedMesh::postprocess(mesh, "pyramid", "demo").unwrap();
        let meta = &generated.metadata;
        assert_eq!(meta.vertex_count, 5);
        assert_eq!(meta.face_count, 6);
        assert_relative_eq!(meta.volume_estimate, 9.0, epsilon = 1e-5);
        assert_eq!(meta.shape_type, "pyramid");
        assert_eq!(meta.model_used, None);
    }

    #[test]
    fn test_repaired_updates_counts() {
        let mesh = generate(PrimitiveKind::Sphere, 1.0).unwrap();
        let mut generated = GeneratedMesh::postprocess(mesh, "sphere", "demo").unwrap();
        generated.metadata.prompt = Some("ball".into());

        let repaired = generated.repaired().unwrap();
        assert!(repaired.metadata.vertex_count < generated.metadata.vertex_count);
        assert_eq!(repaired.metadata.vertex_count, repaired.mesh.vertex_count());
        assert_eq!(repaired.metadata.prompt.as_deref(), Some("ball"));
    }

    #[test]
    fn test_metadata_json_shape() {
        let mesh = generate(PrimitiveKind::Cube, 1.0).unwrap();
        let generated = GeneratedMesh::postprocess(mesh, "cube", "demo").unwrap();
        let json = serde_json::to_value(&generated.metadata).unwrap();
        assert_eq!(json["vertex_count"], 8);
        assert_eq!(json["generation_method"], "demo");
        assert!(json.get("model_used").is_none());
        assert!(json["bounding_box"]["min"].is_array());
    }
}
