//! # Pyramid Primitive

use super::check_size;
use crate::error::MeshResult;
use crate::mesh::Mesh;
use glam::Vec3;

/// Creates a square-based pyramid with base edge and height equal to `size`.
///
/// The base lies at `y = -size/2` and the apex at `y = +size/2`.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::create_pyramid;
///
/// let mesh = create_pyramid(1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 5);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_pyramid(size: f32) -> MeshResult<Mesh> {
    check_size("Pyramid", size)?;

    let s = size / 2.0;
    let mut mesh = Mesh::with_capacity(5, 6);

    let b0 = mesh.add_vertex(Vec3::new(-s, -s, -s));
    let b1 = mesh.add_vertex(Vec3::new(s, -s, -s));
    let b2 = mesh.add_vertex(Vec3::new(s, -s, s));
    let b3 = mesh.add_vertex(Vec3::new(-s, -s, s));
    let apex = mesh.add_vertex(Vec3::new(0.0, s, 0.0));

    // Base, facing -Y
    mesh.add_face(b0, b1, b2);
    mesh.add_face(b0, b2, b3);

    // Sides
    mesh.add_face(b0, apex, b1);
    mesh.add_face(b1, apex, b2);
    mesh.add_face(b2, apex, b3);
    mesh.add_face(b3, apex, b0);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pyramid_volume() {
        // base * height / 3
        let mesh = create_pyramid(3.0).unwrap();
        assert_relative_eq!(mesh.volume(), 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_pyramid_bounds() {
        let bbox = create_pyramid(2.0).unwrap().bounding_box();
        assert_eq!(bbox.min, [-1.0, -1.0, -1.0]);
        assert_eq!(bbox.max, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_pyramid_base_faces_down() {
        let mesh = create_pyramid(1.0).unwrap();
        let v = mesh.vertices();
        for face in &mesh.faces()[..2] {
            let [a, b, c] = face.map(|i| v[i as usize]);
            assert!((b - a).cross(c - a).y < 0.0);
        }
    }

    #[test]
    fn test_pyramid_invalid_size() {
        assert!(create_pyramid(f32::NAN).is_err());
    }
}
