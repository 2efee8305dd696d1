//! # Cylinder Primitive
//!
//! Generates mesh for a closed cylinder standing on the XZ plane.

use super::check_size;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::Vec3;
use std::f64::consts::PI;

/// Creates a cylinder with diameter and height both equal to `size`.
///
/// # Arguments
///
/// * `size` - Diameter and height
/// * `segments` - Number of segments around the circumference
///
/// # Layout
///
/// Vertex 0 is the bottom center and vertex 1 the top center. Ring vertices
/// follow in pairs: `2 + 2i` on the bottom ring and `3 + 2i` directly above it.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 34);
/// assert_eq!(mesh.face_count(), 64);
/// ```
pub fn create_cylinder(size: f32, segments: u32) -> MeshResult<Mesh> {
    check_size("Cylinder", size)?;

    if segments < MIN_SEGMENTS {
        return Err(MeshError::invalid_argument(format!(
            "Cylinder segments must be at least {MIN_SEGMENTS}: {segments}"
        )));
    }

    let radius = f64::from(size) / 2.0;
    let half_height = size / 2.0;
    let mut mesh = Mesh::with_capacity((2 + 2 * segments) as usize, (4 * segments) as usize);

    let bottom_center = mesh.add_vertex(Vec3::new(0.0, -half_height, 0.0));
    let top_center = mesh.add_vertex(Vec3::new(0.0, half_height, 0.0));

    for i in 0..segments {
        let angle = 2.0 * PI * f64::from(i) / f64::from(segments);
        let x = (radius * angle.cos()) as f32;
        let z = (radius * angle.sin()) as f32;

        mesh.add_vertex(Vec3::new(x, -half_height, z));
        mesh.add_vertex(Vec3::new(x, half_height, z));
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        let bottom = 2 + 2 * i;
        let top = bottom + 1;
        let next_bottom = 2 + 2 * next;
        let next_top = next_bottom + 1;

        // Caps
        mesh.add_face(bottom_center, bottom, next_bottom);
        mesh.add_face(top_center, next_top, top);

        // Side quad
        mesh.add_face(bottom, top, next_bottom);
        mesh.add_face(top, next_top, next_bottom);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(1.0, 16).unwrap();
        assert_eq!(mesh.vertex_count(), 34);
        assert_eq!(mesh.face_count(), 64);
    }

    #[test]
    fn test_cylinder_bounds() {
        let bbox = create_cylinder(2.0, 16).unwrap().bounding_box();
        assert_relative_eq!(bbox.min[1], -1.0);
        assert_relative_eq!(bbox.max[1], 1.0);
        assert_relative_eq!(bbox.max[0], 1.0);
        assert_relative_eq!(bbox.size[2], 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cylinder_volume_matches_prism() {
        let segments = 16;
        let mesh = create_cylinder(1.0, segments).unwrap();
        // Inscribed regular polygon area times height
        let n = f64::from(segments);
        let expected = 0.5 * n * 0.25 * (2.0 * PI / n).sin() * 1.0;
        assert_relative_eq!(mesh.volume(), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_cylinder_invalid_params() {
        assert!(create_cylinder(-1.0, 16).is_err());
        assert!(create_cylinder(1.0, 2).is_err());
    }
}
