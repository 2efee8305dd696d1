//! # Cube Primitive
//!
//! Generates the mesh for an origin-centered cube.

use super::check_size;
use crate::error::MeshResult;
use crate::mesh::Mesh;
use glam::Vec3;

/// Creates a cube with edge length `size`, centered at the origin.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::create_cube;
///
/// let mesh = create_cube(2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
pub fn create_cube(size: f32) -> MeshResult<Mesh> {
    check_size("Cube", size)?;

    let mut mesh = Mesh::with_capacity(8, 12);
    let s = size / 2.0;

    // Back face (z = -s)
    let v0 = mesh.add_vertex(Vec3::new(-s, -s, -s)); // 0: left-bottom-back
    let v1 = mesh.add_vertex(Vec3::new(s, -s, -s)); // 1: right-bottom-back
    let v2 = mesh.add_vertex(Vec3::new(s, s, -s)); // 2: right-top-back
    let v3 = mesh.add_vertex(Vec3::new(-s, s, -s)); // 3: left-top-back

    // Front face (z = +s)
    let v4 = mesh.add_vertex(Vec3::new(-s, -s, s)); // 4: left-bottom-front
    let v5 = mesh.add_vertex(Vec3::new(s, -s, s)); // 5: right-bottom-front
    let v6 = mesh.add_vertex(Vec3::new(s, s, s)); // 6: right-top-front
    let v7 = mesh.add_vertex(Vec3::new(-s, s, s)); // 7: left-top-front

    // 12 triangles, counter-clockwise seen from outside

    // z = -s
    mesh.add_face(v0, v2, v1);
    mesh.add_face(v0, v3, v2);

    // z = +s
    mesh.add_face(v4, v5, v6);
    mesh.add_face(v4, v6, v7);

    // y = -s
    mesh.add_face(v0, v1, v5);
    mesh.add_face(v0, v5, v4);

    // y = +s
    mesh.add_face(v2, v3, v7);
    mesh.add_face(v2, v7, v6);

    // x = -s
    mesh.add_face(v3, v0, v4);
    mesh.add_face(v3, v4, v7);

    // x = +s
    mesh.add_face(v1, v2, v6);
    mesh.add_face(v1, v6, v5);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_counts() {
        let mesh = create_cube(1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
    }

    #[test]
    fn test_cube_bounding_box() {
        let bbox = create_cube(2.0).unwrap().bounding_box();
        assert_eq!(bbox.min, [-1.0, -1.0, -1.0]);
        assert_eq!(bbox.max, [1.0, 1.0, 1.0]);
        assert_eq!(bbox.center, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cube_volume_and_area() {
        let mesh = create_cube(2.0).unwrap();
        assert_relative_eq!(mesh.volume(), 8.0, epsilon = 1e-3);
        assert_relative_eq!(mesh.surface_area(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let mesh = create_cube(1.0).unwrap();
        let v = mesh.vertices();
        for face in mesh.faces() {
            let [a, b, c] = face.map(|i| v[i as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "face {face:?} points inward");
        }
    }

    #[test]
    fn test_cube_invalid_size() {
        assert!(create_cube(0.0).is_err());
        assert!(create_cube(-5.0).is_err());
    }
}
