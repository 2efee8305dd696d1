//! # Geometric Estimates
//!
//! Pure functions over vertex/face arrays: bounding box, surface area and
//! enclosed volume.
//!
//! Faces that reference a missing vertex are skipped so that one corrupt
//! face never discards the estimate for the rest of the mesh.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a vertex set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Component-wise minimum
    pub min: [f32; 3],
    /// Component-wise maximum
    pub max: [f32; 3],
    /// `max - min`
    pub size: [f32; 3],
    /// `(min + max) / 2`
    pub center: [f32; 3],
}

impl BoundingBox {
    fn from_corners(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.to_array(),
            max: max.to_array(),
            size: (max - min).to_array(),
            center: ((min + max) / 2.0).to_array(),
        }
    }
}

/// Computes the axis-aligned bounding box.
///
/// An empty vertex list yields the all-zero box.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::estimate::bounding_box;
/// use glam::Vec3;
///
/// let bbox = bounding_box(&[Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 2.0)]);
/// assert_eq!(bbox.min, [-1.0, 0.0, 2.0]);
/// assert_eq!(bbox.size, [4.0, 4.0, 0.0]);
/// assert_eq!(bbox.center, [1.0, 2.0, 2.0]);
/// ```
pub fn bounding_box(vertices: &[Vec3]) -> BoundingBox {
    let Some((first, rest)) = vertices.split_first() else {
        return BoundingBox::default();
    };

    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));

    BoundingBox::from_corners(min, max)
}

/// Area of a single triangle: `|cross(b - a, c - a)| / 2`.
#[inline]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    let (a, b, c) = (a.as_dvec3(), b.as_dvec3(), c.as_dvec3());
    (b - a).cross(c - a).length() / 2.0
}

/// Sum of all triangle areas.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::estimate::surface_area;
/// use glam::Vec3;
///
/// let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// assert_eq!(surface_area(&vertices, &[[0, 1, 2]]), 0.5);
/// ```
pub fn surface_area(vertices: &[Vec3], faces: &[[u32; 3]]) -> f64 {
    faces
        .iter()
        .filter_map(|face| face_positions(vertices, face))
        .map(|[a, b, c]| triangle_area(a, b, c))
        .sum()
}

/// Enclosed volume by the divergence theorem.
///
/// Sums the signed volumes of the tetrahedra spanned by the origin and each
/// face, and takes the absolute value of the total. Only physically
/// meaningful for a closed, consistently wound mesh.
pub fn volume(vertices: &[Vec3], faces: &[[u32; 3]]) -> f64 {
    signed_volume(vertices, faces).abs()
}

/// Signed volume; positive for a closed mesh with outward-facing winding.
pub fn signed_volume(vertices: &[Vec3], faces: &[[u32; 3]]) -> f64 {
    faces
        .iter()
        .filter_map(|face| face_positions(vertices, face))
        .map(|[a, b, c]| {
            let (a, b, c): (DVec3, DVec3, DVec3) = (a.as_dvec3(), b.as_dvec3(), c.as_dvec3());
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}

/// Looks up the three corners of a face, or `None` when an index is missing.
pub(crate) fn face_positions(vertices: &[Vec3], face: &[u32; 3]) -> Option<[Vec3; 3]> {
    let lookup = |i: u32| vertices.get(i as usize).copied();
    match (lookup(face[0]), lookup(face[1]), lookup(face[2])) {
        (Some(a), Some(b), Some(c)) => Some([a, b, c]),
        _ => {
            tracing::debug!(?face, vertex_count = vertices.len(), "skipping face with missing vertex");
            None
        }
    }
}
