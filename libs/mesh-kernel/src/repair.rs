//! # Mesh Repair
//!
//! Vertex welding and degenerate face removal.
//!
//! ## Welding
//!
//! A vertex whose coordinates are all within `tolerance` of an already kept
//! vertex is merged into it. The first kept vertex in insertion order wins.
//! Candidates are found through a spatial hash with cells twice the
//! tolerance wide, and the lowest kept index among matches is chosen, so the
//! result is the same as a full pairwise scan.

use crate::error::{MeshError, MeshResult};
use crate::estimate::{face_positions, triangle_area};
use crate::mesh::Mesh;
use config::constants::{GlobalConfig, DEGENERATE_AREA_EPSILON};
use glam::Vec3;
use std::collections::HashMap;

// =============================================================================
// WELDING
// =============================================================================

/// Merges vertices that lie within `tolerance` of each other.
///
/// Face indices are remapped onto the surviving vertices. Faces are kept
/// even when welding collapses them; [`remove_degenerate_faces`] drops those.
///
/// # Errors
///
/// - `InvalidArgument` if `tolerance` is negative or not finite
/// - `IndexOutOfBounds` if a face references a missing vertex
///
/// # Example
///
/// ```rust
/// use mesh_kernel::{repair::weld_vertices, Mesh};
/// use glam::Vec3;
///
/// let mesh = Mesh::from_parts(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 0.0, 1e-9)],
///     vec![[0, 1, 2], [0, 3, 2]],
/// );
/// let welded = weld_vertices(&mesh, 1e-6).unwrap();
/// assert_eq!(welded.vertex_count(), 3);
/// assert_eq!(welded.faces(), &[[0, 1, 2], [0, 1, 2]]);
/// ```
pub fn weld_vertices(mesh: &Mesh, tolerance: f64) -> MeshResult<Mesh> {
    mesh.check_indices()?;

    let (kept, remap) = weld_map(mesh.vertices(), tolerance)?;
    let faces = mesh
        .faces()
        .iter()
        .map(|f| [remap[f[0] as usize], remap[f[1] as usize], remap[f[2] as usize]])
        .collect();

    tracing::debug!(
        before = mesh.vertex_count(),
        after = kept.len(),
        tolerance,
        "welded vertices"
    );

    Ok(Mesh::from_parts(kept, faces))
}

/// Computes the welded vertex list and the old-index -> new-index map.
pub(crate) fn weld_map(vertices: &[Vec3], tolerance: f64) -> MeshResult<(Vec<Vec3>, Vec<u32>)> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(MeshError::invalid_argument(format!(
            "weld tolerance must be finite and non-negative: {tolerance}"
        )));
    }

    let grid = WeldGrid::new(tolerance);
    let mut cells: HashMap<[i64; 3], Vec<u32>> = HashMap::new();
    let mut kept: Vec<Vec3> = Vec::with_capacity(vertices.len());
    let mut remap: Vec<u32> = Vec::with_capacity(vertices.len());

    for &vertex in vertices {
        let cell = grid.cell(vertex);

        let existing = grid
            .neighbours(cell)
            .filter_map(|key| cells.get(&key))
            .flatten()
            .copied()
            .filter(|&k| within(vertex, kept[k as usize], tolerance))
            .min();

        let index = match existing {
            Some(k) => k,
            None => {
                let k = kept.len() as u32;
                kept.push(vertex);
                cells.entry(cell).or_default().push(k);
                k
            }
        };
        remap.push(index);
    }

    Ok((kept, remap))
}

/// L-infinity closeness; NaN coordinates never match.
#[inline]
fn within(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    let d = a.as_dvec3() - b.as_dvec3();
    d.x.abs() <= tolerance && d.y.abs() <= tolerance && d.z.abs() <= tolerance
}

/// Spatial hash layout for a given tolerance.
struct WeldGrid {
    /// Cell edge length, `None` for exact matching.
    cell_size: Option<f64>,
}

impl WeldGrid {
    fn new(tolerance: f64) -> Self {
        let cell_size = (tolerance > 0.0).then_some(tolerance * 2.0);
        Self { cell_size }
    }

    fn cell(&self, v: Vec3) -> [i64; 3] {
        match self.cell_size {
            Some(size) => v
                .to_array()
                .map(|c| (f64::from(c) / size).floor() as i64),
            // -0.0 + 0.0 == +0.0, so both zeros share a key
            None => v.to_array().map(|c| i64::from((c + 0.0).to_bits())),
        }
    }

    fn neighbours(&self, cell: [i64; 3]) -> impl Iterator<Item = [i64; 3]> {
        let reach: i64 = if self.cell_size.is_some() { 1 } else { 0 };
        (-reach..=reach).flat_map(move |dx| {
            (-reach..=reach).flat_map(move |dy| {
                (-reach..=reach).map(move |dz| {
                    [
                        cell[0].saturating_add(dx),
                        cell[1].saturating_add(dy),
                        cell[2].saturating_add(dz),
                    ]
                })
            })
        })
    }
}

// =============================================================================
// DEGENERATE FACES
// =============================================================================

/// Drops faces with repeated indices, missing vertices or (near) zero area.
///
/// If every face would be dropped, the input faces are returned unchanged
/// so the caller never silently ends up with a faceless mesh.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::repair::remove_degenerate_faces;
/// use glam::Vec3;
///
/// let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::X * 2.0];
/// let faces = [[0, 1, 2], [0, 1, 3], [2, 2, 1]];
/// assert_eq!(remove_degenerate_faces(&vertices, &faces), vec![[0, 1, 2]]);
/// ```
pub fn remove_degenerate_faces(vertices: &[Vec3], faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    remove_degenerate_faces_with(vertices, faces, DEGENERATE_AREA_EPSILON)
}

/// [`remove_degenerate_faces`] with an explicit area threshold.
pub fn remove_degenerate_faces_with(
    vertices: &[Vec3],
    faces: &[[u32; 3]],
    area_epsilon: f64,
) -> Vec<[u32; 3]> {
    let kept: Vec<[u32; 3]> = faces
        .iter()
        .filter(|f| f[0] != f[1] && f[1] != f[2] && f[0] != f[2])
        .filter(|f| {
            face_positions(vertices, f)
                .map(|[a, b, c]| triangle_area(a, b, c) > area_epsilon)
                .unwrap_or(false)
        })
        .copied()
        .collect();

    if kept.is_empty() && !faces.is_empty() {
        tracing::warn!(
            face_count = faces.len(),
            "every face is degenerate; keeping the original faces"
        );
        return faces.to_vec();
    }

    tracing::debug!(removed = faces.len() - kept.len(), "removed degenerate faces");
    kept
}

// =============================================================================
// COMBINED REPAIR
// =============================================================================

/// Welds duplicate vertices and removes degenerate faces using the default
/// tolerances.
pub fn repair_mesh(mesh: &Mesh) -> MeshResult<Mesh> {
    repair_mesh_with(mesh, &GlobalConfig::default())
}

/// Welds duplicate vertices and removes degenerate faces.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::{repair::repair_mesh, Mesh};
/// use glam::Vec3;
///
/// // Two triangles of a quad stored as an unindexed triangle soup
/// let mesh = Mesh::from_parts(
///     vec![
///         Vec3::ZERO, Vec3::X, Vec3::ONE,
///         Vec3::ZERO, Vec3::ONE, Vec3::Y,
///     ],
///     vec![[0, 1, 2], [3, 4, 5]],
/// );
/// let repaired = repair_mesh(&mesh).unwrap();
/// assert_eq!(repaired.vertex_count(), 4);
/// assert_eq!(repaired.face_count(), 2);
/// ```
pub fn repair_mesh_with(mesh: &Mesh, config: &GlobalConfig) -> MeshResult<Mesh> {
    let mut welded = weld_vertices(mesh, config.weld_tolerance)?;
    let faces = remove_degenerate_faces_with(
        welded.vertices(),
        welded.faces(),
        config.degenerate_area_epsilon,
    );
    welded.set_faces(faces);

    tracing::info!(
        vertices_before = mesh.vertex_count(),
        vertices_after = welded.vertex_count(),
        faces_before = mesh.face_count(),
        faces_after = welded.face_count(),
        "repaired mesh"
    );

    Ok(welded)
}
