//! # Topology Analysis
//!
//! Manifold and watertight detection over triangle meshes.
//!
//! ## Overview
//!
//! The validator consumes topology analysis through the [`TopologyAnalyzer`]
//! trait so it can run with or without a working implementation:
//!
//! - [`EdgeTopologyAnalyzer`]: edge-adjacency analysis after welding
//!   coincident vertices (the default)
//! - [`UnavailableTopology`]: always fails, for environments where the
//!   analysis must be reported as missing
//!
//! ## Definitions
//!
//! ```text
//! boundary edge      edge with exactly one adjacent face
//! non-manifold edge  edge with more than two adjacent faces
//! non-manifold vert  vertex whose faces form more than one fan
//! watertight         no boundary edges
//! manifold           every edge has two faces, no non-manifold vertex
//! ```

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::repair::weld_map;
use config::constants::GlobalConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// REPORT
// =============================================================================

/// Result of a topology analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyReport {
    /// Every edge borders exactly two faces and every vertex has a single fan.
    pub is_manifold: bool,
    /// No edge borders only one face.
    pub is_watertight: bool,
    /// Edges with exactly one adjacent face.
    pub boundary_edges: usize,
    /// Edges with more than two adjacent faces.
    pub non_manifold_edges: usize,
    /// Vertices whose incident faces do not form one connected fan.
    pub non_manifold_vertices: usize,
    /// Two-face edges traversed in the same direction by both faces.
    pub inconsistent_edges: usize,
}

// =============================================================================
// ANALYZER CAPABILITY
// =============================================================================

/// Capability that determines manifoldness and watertightness.
pub trait TopologyAnalyzer: Send + Sync {
    /// Analyzes a mesh whose face indices are all in range.
    fn analyze(&self, mesh: &Mesh) -> MeshResult<TopologyReport>;
}

/// Edge-adjacency topology analysis.
///
/// Vertices within `weld_tolerance` of each other are treated as one
/// before edges are counted, and faces that collapse to a repeated index are
/// ignored. This way the duplicated seam and pole vertices of a UV sphere do
/// not count as holes.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::{generate, PrimitiveKind};
/// use mesh_kernel::topology::{EdgeTopologyAnalyzer, TopologyAnalyzer};
///
/// let cube = generate(PrimitiveKind::Cube, 1.0).unwrap();
/// let report = EdgeTopologyAnalyzer::default().analyze(&cube).unwrap();
/// assert!(report.is_manifold);
/// assert!(report.is_watertight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTopologyAnalyzer {
    /// Tolerance used to merge coincident vertices before analysis.
    pub weld_tolerance: f64,
}

impl EdgeTopologyAnalyzer {
    /// Creates an analyzer with an explicit weld tolerance.
    pub fn new(weld_tolerance: f64) -> Self {
        Self { weld_tolerance }
    }

    /// Creates an analyzer from the global configuration.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.weld_tolerance)
    }
}

impl Default for EdgeTopologyAnalyzer {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

impl TopologyAnalyzer for EdgeTopologyAnalyzer {
    fn analyze(&self, mesh: &Mesh) -> MeshResult<TopologyReport> {
        mesh.check_indices()?;

        let (_, remap) = weld_map(mesh.vertices(), self.weld_tolerance)?;
        let faces: Vec<[u32; 3]> = mesh
            .faces()
            .iter()
            .map(|f| [remap[f[0] as usize], remap[f[1] as usize], remap[f[2] as usize]])
            .filter(|&[a, b, c]| a != b && b != c && a != c)
            .collect();

        if faces.is_empty() {
            tracing::debug!("no faces left after welding; mesh has no surface");
            return Ok(TopologyReport::default());
        }

        let adjacency = EdgeAdjacency::build(&faces);
        let boundary_edges = adjacency.boundary_edge_count();
        let non_manifold_edges = adjacency.non_manifold_edge_count();
        let non_manifold_vertices = adjacency.non_manifold_vertex_count();
        let inconsistent_edges = adjacency.inconsistent_edge_count();

        Ok(TopologyReport {
            is_manifold: boundary_edges == 0 && non_manifold_edges == 0 && non_manifold_vertices == 0,
            is_watertight: boundary_edges == 0,
            boundary_edges,
            non_manifold_edges,
            non_manifold_vertices,
            inconsistent_edges,
        })
    }
}

/// Analyzer for environments without topology support.
///
/// Every call fails, which the validator turns into a warning.
#[derive(Debug, Clone, Default)]
pub struct UnavailableTopology {
    reason: String,
}

impl UnavailableTopology {
    /// Creates an analyzer that fails with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TopologyAnalyzer for UnavailableTopology {
    fn analyze(&self, _mesh: &Mesh) -> MeshResult<TopologyReport> {
        Err(MeshError::topology_unavailable(self.reason.clone()))
    }
}

// =============================================================================
// EDGE ADJACENCY
// =============================================================================

/// Edge and vertex adjacency of a face list.
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    /// Undirected edge (v0 < v1) -> adjacent face indices.
    edge_to_faces: HashMap<(u32, u32), Vec<usize>>,
    /// Directed edge -> number of faces traversing it in that direction.
    directed: HashMap<(u32, u32), usize>,
    /// Vertex -> adjacent face indices.
    vertex_to_faces: HashMap<u32, Vec<usize>>,
    /// Copy of the faces the adjacency was built from.
    faces: Vec<[u32; 3]>,
}

impl EdgeAdjacency {
    /// Builds adjacency information from a list of faces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_kernel::topology::EdgeAdjacency;
    ///
    /// let adjacency = EdgeAdjacency::build(&[[0, 1, 2], [1, 3, 2]]);
    /// assert_eq!(adjacency.edge_count(), 5);
    /// assert_eq!(adjacency.boundary_edge_count(), 4);
    /// ```
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut adjacency = Self {
            faces: faces.to_vec(),
            ..Self::default()
        };

        for (face_idx, face) in faces.iter().enumerate() {
            for &v in face {
                adjacency.vertex_to_faces.entry(v).or_default().push(face_idx);
            }
            for (a, b) in face_edges(face) {
                adjacency
                    .edge_to_faces
                    .entry(normalize_edge(a, b))
                    .or_default()
                    .push(face_idx);
                *adjacency.directed.entry((a, b)).or_default() += 1;
            }
        }

        adjacency
    }

    /// Faces adjacent to an edge, in either direction.
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        self.edge_to_faces
            .get(&normalize_edge(v0, v1))
            .map(Vec::as_slice)
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }

    /// Edges with exactly one adjacent face.
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_faces.values().filter(|f| f.len() == 1).count()
    }

    /// Edges with more than two adjacent faces.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_faces.values().filter(|f| f.len() > 2).count()
    }

    /// Two-face edges whose faces traverse them in the same direction.
    pub fn inconsistent_edge_count(&self) -> usize {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() == 2)
            .filter(|(&(a, b), _)| {
                self.directed.get(&(a, b)).copied().unwrap_or(0) != 1
                    || self.directed.get(&(b, a)).copied().unwrap_or(0) != 1
            })
            .count()
    }

    /// Vertices whose incident faces split into more than one edge-connected fan.
    pub fn non_manifold_vertex_count(&self) -> usize {
        self.vertex_to_faces
            .iter()
            .filter(|(&v, faces)| self.fan_count(v, faces) > 1)
            .count()
    }

    /// Counts the fans around `vertex`: groups of incident faces connected
    /// through edges that contain `vertex`.
    fn fan_count(&self, vertex: u32, incident: &[usize]) -> usize {
        let mut parent: Vec<usize> = (0..incident.len()).collect();
        let mut first_with_neighbor: HashMap<u32, usize> = HashMap::new();

        for (local, &face_idx) in incident.iter().enumerate() {
            for &other in &self.faces[face_idx] {
                if other == vertex {
                    continue;
                }
                match first_with_neighbor.get(&other) {
                    Some(&earlier) => union(&mut parent, earlier, local),
                    None => {
                        first_with_neighbor.insert(other, local);
                    }
                }
            }
        }

        (0..incident.len())
            .filter(|&i| find(&mut parent, i) == i)
            .count()
    }
}

/// Directed edges of a face in winding order.
#[inline]
fn face_edges(face: &[u32; 3]) -> [(u32, u32); 3] {
    [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])]
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let (ra, rb) = (find(parent, a), find(parent, b));
    if ra != rb {
        parent[rb] = ra;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{generate, PrimitiveKind};
    use glam::Vec3;

    fn analyze(mesh: &Mesh) -> TopologyReport {
        EdgeTopologyAnalyzer::default().analyze(mesh).unwrap()
    }

    #[test]
    fn test_all_primitives_are_closed_manifolds() {
        for kind in PrimitiveKind::ALL {
            let mesh = generate(kind, 1.0).unwrap();
            let report = analyze(&mesh);
            assert!(report.is_watertight, "{kind} should be watertight: {report:?}");
            assert!(report.is_manifold, "{kind} should be manifold: {report:?}");
            assert_eq!(report.inconsistent_edges, 0, "{kind} winding: {report:?}");
        }
    }

    #[test]
    fn test_open_quad_is_not_watertight() {
        let mesh = Mesh::from_parts(
            vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let report = analyze(&mesh);
        assert!(!report.is_watertight);
        assert!(!report.is_manifold);
        assert_eq!(report.boundary_edges, 4);
    }

    #[test]
    fn test_cube_with_missing_face_has_boundary() {
        let mut mesh = generate(PrimitiveKind::Cube, 1.0).unwrap();
        let mut faces = mesh.faces().to_vec();
        faces.pop();
        mesh.set_faces(faces);
        let report = analyze(&mesh);
        assert!(!report.is_watertight);
        assert_eq!(report.boundary_edges, 3);
    }

    #[test]
    fn test_fin_edge_is_non_manifold() {
        // Three triangles sharing the edge (0, 1)
        let mesh = Mesh::from_parts(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_Y],
            vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]],
        );
        let report = analyze(&mesh);
        assert_eq!(report.non_manifold_edges, 1);
        assert!(!report.is_manifold);
    }

    #[test]
    fn test_bowtie_vertex_is_non_manifold() {
        let adjacency = EdgeAdjacency::build(&[[0, 1, 2], [0, 3, 4]]);
        assert_eq!(adjacency.non_manifold_vertex_count(), 1);
    }

    #[test]
    fn test_flipped_face_is_inconsistent() {
        let mut mesh = generate(PrimitiveKind::Cube, 1.0).unwrap();
        let mut faces = mesh.faces().to_vec();
        faces[0] = [faces[0][0], faces[0][2], faces[0][1]];
        mesh.set_faces(faces);
        let report = analyze(&mesh);
        assert!(report.is_watertight);
        assert_eq!(report.inconsistent_edges, 3);
    }

    #[test]
    fn test_collapsed_mesh_has_no_surface() {
        let mesh = Mesh::from_parts(vec![Vec3::ZERO, Vec3::ZERO, Vec3::ZERO], vec![[0, 1, 2]]);
        let report = analyze(&mesh);
        assert!(!report.is_manifold);
        assert!(!report.is_watertight);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mesh = Mesh::from_parts(vec![Vec3::ZERO], vec![[0, 1, 2]]);
        assert!(EdgeTopologyAnalyzer::default().analyze(&mesh).is_err());
    }

    #[test]
    fn test_unavailable_topology_fails() {
        let mesh = generate(PrimitiveKind::Cube, 1.0).unwrap();
        let err = UnavailableTopology::new("no topology backend").analyze(&mesh).unwrap_err();
        assert_eq!(err, MeshError::topology_unavailable("no topology backend"));
    }
}
