//! # Mesh Buffers
//!
//! Flat vertex/index arrays as they arrive from outside the kernel.
//!
//! ## Layout
//!
//! ```text
//! vertices: [x0, y0, z0, x1, y1, z1, ...]   (N rows of 3)
//! indices:  [a0, b0, c0, a1, b1, c1, ...]   (M rows of 3)
//! ```
//!
//! Indices are signed so that negative values sent by a caller survive
//! long enough to be reported by the validator.

use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Raw mesh arrays with no structural guarantees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<i64>,
}

impl MeshBuffers {
    /// Creates buffers from flat arrays.
    pub fn new(vertices: Vec<f32>, indices: Vec<i64>) -> Self {
        Self { vertices, indices }
    }

    /// Returns the number of complete vertex rows.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of complete index rows.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the vertex buffer has shape (N, 3).
    pub fn has_vertex_shape(&self) -> bool {
        self.vertices.len() % 3 == 0
    }

    /// True when the index buffer has shape (M, 3).
    pub fn has_face_shape(&self) -> bool {
        self.indices.len() % 3 == 0
    }
}

impl From<&Mesh> for MeshBuffers {
    fn from(mesh: &Mesh) -> Self {
        let vertices = mesh
            .vertices()
            .iter()
            .flat_map(|v| v.to_array())
            .collect();
        let indices = mesh
            .faces()
            .iter()
            .flatten()
            .map(|&i| i64::from(i))
            .collect();
        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_from_mesh_flattens() {
        let mesh = Mesh::from_parts(
            vec![Vec3::new(1.0, 2.0, 3.0), Vec3::X, Vec3::Y],
            vec![[0, 1, 2]],
        );
        let buffers = MeshBuffers::from(&mesh);
        assert_eq!(buffers.vertices, vec![1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.face_count(), 1);
    }

    #[test]
    fn test_shape_checks() {
        let buffers = MeshBuffers::new(vec![0.0; 7], vec![0, 1]);
        assert!(!buffers.has_vertex_shape());
        assert!(!buffers.has_face_shape());
        assert_eq!(buffers.vertex_count(), 2);

        let empty = MeshBuffers::default();
        assert!(empty.has_vertex_shape());
        assert!(empty.has_face_shape());
    }
}
