//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use super::check_size;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a UV sphere with diameter `size`.
///
/// # Arguments
///
/// * `size` - Diameter of the sphere
/// * `lat_segments` - Number of bands from the south pole to the north pole
/// * `lon_segments` - Number of segments around the circumference
///
/// # Returns
///
/// A mesh with `(lat + 1) * (lon + 1)` vertices and `2 * lat * lon` faces.
///
/// # Algorithm
///
/// - Ring `i` sits at latitude `PI * (i / lat - 0.5)`, from -90° to +90°
/// - Each ring has `lon + 1` vertices, the last one closing the seam
/// - Pole and seam vertices are duplicated, so the triangles touching
///   the poles have zero area until the mesh is repaired
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::create_sphere;
///
/// let mesh = create_sphere(1.0, 16, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 561);
/// assert_eq!(mesh.face_count(), 1024);
/// ```
pub fn create_sphere(size: f32, lat_segments: u32, lon_segments: u32) -> MeshResult<Mesh> {
    check_size("Sphere", size)?;

    if lat_segments < 2 {
        return Err(MeshError::invalid_argument(format!(
            "Sphere latitude segments must be at least 2: {lat_segments}"
        )));
    }
    if lon_segments < MIN_SEGMENTS {
        return Err(MeshError::invalid_argument(format!(
            "Sphere longitude segments must be at least {MIN_SEGMENTS}: {lon_segments}"
        )));
    }

    let radius = f64::from(size) / 2.0;
    let ring = lon_segments + 1;
    let mut mesh = Mesh::with_capacity(
        ((lat_segments + 1) * ring) as usize,
        (2 * lat_segments * lon_segments) as usize,
    );

    for i in 0..=lat_segments {
        let lat = PI * (-0.5 + f64::from(i) / f64::from(lat_segments));
        let (sin_lat, cos_lat) = lat.sin_cos();

        for j in 0..=lon_segments {
            let lon = 2.0 * PI * f64::from(j) / f64::from(lon_segments);
            let (sin_lon, cos_lon) = lon.sin_cos();
            let position = DVec3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon) * radius;
            mesh.add_vertex(position.as_vec3());
        }
    }

    for i in 0..lat_segments {
        for j in 0..lon_segments {
            let first = i * ring + j;
            let second = first + ring;

            mesh.add_face(first, second, first + 1);
            mesh.add_face(second, second + 1, first + 1);
        }
    }

    Ok(mesh)
}
