//! # Primitives
//!
//! Mesh generation for the parametric primitives (cube, sphere, cylinder,
//! pyramid).
//!
//! All primitives are centered at the origin with +Y up and wound
//! counter-clockwise when seen from outside, so face normals point outward.

pub mod cube;
pub mod cylinder;
pub mod pyramid;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use pyramid::create_pyramid;
pub use sphere::create_sphere;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{CYLINDER_SEGMENTS, SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of shapes the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Cylinder,
    Pyramid,
}

impl PrimitiveKind {
    /// Every primitive kind.
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Cube,
        PrimitiveKind::Sphere,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Pyramid,
    ];

    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Pyramid => "pyramid",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeshError::invalid_argument(format!("unknown primitive kind: {s:?}")))
    }
}

/// Generates the mesh for a primitive at the default resolution.
///
/// `size` is the characteristic edge length or diameter.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::{generate, PrimitiveKind};
///
/// let mesh = generate(PrimitiveKind::Cylinder, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 34);
/// assert_eq!(mesh.face_count(), 64);
/// assert!(generate(PrimitiveKind::Cube, 0.0).is_err());
/// ```
pub fn generate(kind: PrimitiveKind, size: f32) -> MeshResult<Mesh> {
    match kind {
        PrimitiveKind::Cube => create_cube(size),
        PrimitiveKind::Sphere => create_sphere(size, SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS),
        PrimitiveKind::Cylinder => create_cylinder(size, CYLINDER_SEGMENTS),
        PrimitiveKind::Pyramid => create_pyramid(size),
    }
}

/// Rejects sizes that cannot produce a solid.
pub(crate) fn check_size(shape: &str, size: f32) -> MeshResult<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_argument(format!(
            "{shape} size must be positive: {size}"
        )))
    }
}
