//! # Mesh Data Structure
//!
//! Core mesh representation: an ordered vertex list and triangle indices.

use crate::buffers::MeshBuffers;
use crate::error::{MeshError, MeshResult};
use crate::estimate::{self, BoundingBox};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and indices.
///
/// Positions are stored in single precision, which is what every consumer
/// (file export, rendering) wants. Accumulating estimates promote to f64.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::Mesh;
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(0, 1, 2);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<Vec3>,
    /// Triangle indices (3 indices per triangle)
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Creates a mesh from existing arrays without checking indices.
    ///
    /// Use [`Mesh::try_from_parts`] when the faces come from an untrusted
    /// source.
    pub fn from_parts(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Creates a mesh from existing arrays, rejecting out-of-range indices.
    pub fn try_from_parts(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> MeshResult<Self> {
        let mesh = Self { vertices, faces };
        mesh.check_indices()?;
        Ok(mesh)
    }

    /// Splits the mesh back into its arrays.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<[u32; 3]>) {
        (self.vertices, self.faces)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices or no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Replaces the face list, keeping the vertices.
    pub fn set_faces(&mut self, faces: Vec<[u32; 3]>) {
        self.faces = faces;
    }

    /// Returns the first face index that does not reference a vertex.
    pub fn check_indices(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        match self
            .faces
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            Some(&index) => Err(MeshError::IndexOutOfBounds {
                index,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// Computes the axis-aligned bounding box.
    pub fn bounding_box(&self) -> BoundingBox {
        estimate::bounding_box(&self.vertices)
    }

    /// Total surface area of all faces.
    pub fn surface_area(&self) -> f64 {
        estimate::surface_area(&self.vertices, &self.faces)
    }

    /// Enclosed volume estimate (meaningful for closed meshes only).
    pub fn volume(&self) -> f64 {
        estimate::volume(&self.vertices, &self.faces)
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Moves the vertex centroid to the origin.
    pub fn center(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        let sum = self
            .vertices
            .iter()
            .fold(glam::DVec3::ZERO, |acc, v| acc + v.as_dvec3());
        let centroid = (sum / self.vertices.len() as f64).as_vec3();
        self.translate(-centroid);
    }

    /// Scales all vertices uniformly about the origin.
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            *v *= factor;
        }
    }

    /// Scales the mesh so its largest bounding box extent equals `target_size`.
    ///
    /// Meshes with zero extent are left untouched.
    pub fn normalize_size(&mut self, target_size: f32) {
        if self.vertices.is_empty() {
            return;
        }
        let extent = Vec3::from(self.bounding_box().size).max_element();
        if extent > 0.0 {
            self.scale(target_size / extent);
        }
    }

    /// Exports the mesh as flat buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO);
        mesh.add_vertex(Vec3::X);
        mesh.add_vertex(Vec3::Y);
        mesh.add_face(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertices()[0], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_face() {
        let mesh = triangle();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces()[0], [0, 1, 2]);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_try_from_parts_rejects_bad_index() {
        let result = Mesh::try_from_parts(vec![Vec3::ZERO], vec![[0, 1, 2]]);
        assert_eq!(
            result.unwrap_err(),
            MeshError::IndexOutOfBounds {
                index: 1,
                vertex_count: 1
            }
        );
    }

    #[test]
    fn test_center_moves_centroid_to_origin() {
        let mut mesh = triangle();
        mesh.translate(Vec3::new(10.0, 0.0, -4.0));
        mesh.center();
        let sum: Vec3 = mesh.vertices().iter().copied().sum();
        assert_relative_eq!(sum.length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_normalize_size() {
        let mut mesh = triangle();
        mesh.scale(4.0);
        mesh.normalize_size(2.0);
        let bbox = mesh.bounding_box();
        assert_relative_eq!(bbox.size[0], 2.0);
        assert_relative_eq!(bbox.size[1], 2.0);
    }

    #[test]
    fn test_normalize_size_flat_point_is_untouched() {
        let mut mesh = Mesh::from_parts(vec![Vec3::ONE, Vec3::ONE, Vec3::ONE], vec![[0, 1, 2]]);
        mesh.normalize_size(2.0);
        assert_eq!(mesh.vertices()[0], Vec3::ONE);
    }

    #[test]
    fn test_mesh_serde_roundtrip() {
        let mesh = triangle();
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(mesh, back);
    }
}
