//! Winding and topology validation for generated cube-spheres.
//!
//! A correct mesh is a closed 2-manifold: every undirected edge is shared by
//! exactly two triangles which traverse it in opposite directions, and every
//! triangle's geometric normal points away from the centre.

use glam::DVec3;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::index_group::IndexGroup;
use crate::mesh::CubeSphereMesh;

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the normal computed from the vertex order (via cross
/// product) lies in the same hemisphere as `outward`, typically the mean of
/// the three vertex normals.
pub fn triangle_winds_outward(v0: DVec3, v1: DVec3, v2: DVec3, outward: DVec3) -> bool {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let face_normal = edge1.cross(edge2);

    face_normal.dot(outward) > 0.0
}

/// Summary of a mesh's combinatorial and winding health.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopologyReport {
    /// Vertices in the field.
    pub vertex_count: usize,
    /// Triangles across all groups.
    pub triangle_count: usize,
    /// Distinct undirected edges.
    pub edge_count: usize,
    /// Edges used by only one triangle.
    pub boundary_edges: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edges: usize,
    /// Directed edges traversed by more than one triangle (inconsistent winding).
    pub misoriented_edges: usize,
    /// Vertices no triangle references.
    pub unreferenced_vertices: usize,
    /// Indices `>=` the vertex count.
    pub out_of_range_indices: usize,
    /// Triangles repeating a vertex.
    pub degenerate_triangles: usize,
    /// Triangles whose geometric normal faces inward.
    pub inward_triangles: usize,
}

impl TopologyReport {
    /// Analyze all three index groups of `mesh` together.
    pub fn analyze(mesh: &CubeSphereMesh) -> Self {
        let vertex_count = mesh.vertex_count();
        let positions = mesh.positions();
        let normals = mesh.normals();

        let mut report = TopologyReport {
            vertex_count,
            ..Default::default()
        };
        let mut edge_uses: FxHashMap<(u32, u32), u32> = FxHashMap::default();
        let mut directed: FxHashSet<(u32, u32)> = FxHashSet::default();
        let mut referenced = vec![false; vertex_count];

        for group in IndexGroup::ALL {
            for tri in mesh.triangles(group) {
                report.triangle_count += 1;

                let in_range = tri.iter().filter(|&&i| (i as usize) < vertex_count).count();
                if in_range < 3 {
                    report.out_of_range_indices += 3 - in_range;
                    continue;
                }
                let [a, b, c] = tri;
                if a == b || b == c || a == c {
                    report.degenerate_triangles += 1;
                    continue;
                }

                for i in tri {
                    referenced[i as usize] = true;
                }
                for (from, to) in [(a, b), (b, c), (c, a)] {
                    *edge_uses.entry((from.min(to), from.max(to))).or_insert(0) += 1;
                    if !directed.insert((from, to)) {
                        report.misoriented_edges += 1;
                    }
                }

                let p = tri.map(|i| DVec3::from(positions[i as usize].map(f64::from)));
                let outward = tri
                    .iter()
                    .map(|&i| DVec3::from(normals[i as usize].map(f64::from)))
                    .sum::<DVec3>();
                if !triangle_winds_outward(p[0], p[1], p[2], outward) {
                    report.inward_triangles += 1;
                }
            }
        }

        report.edge_count = edge_uses.len();
        for &uses in edge_uses.values() {
            match uses {
                1 => report.boundary_edges += 1,
                2 => {}
                _ => report.non_manifold_edges += 1,
            }
        }
        report.unreferenced_vertices = referenced.iter().filter(|&&r| !r).count();

        debug!(?report, "topology analyzed");
        report
    }

    /// Every edge shared by exactly two triangles, every index valid, every
    /// vertex used, and no degenerate or misoriented triangles.
    pub fn is_closed_manifold(&self) -> bool {
        self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.misoriented_edges == 0
            && self.unreferenced_vertices == 0
            && self.out_of_range_indices == 0
            && self.degenerate_triangles == 0
    }

    /// No triangle faces inward.
    pub fn is_consistently_outward(&self) -> bool {
        self.inward_triangles == 0
    }

    /// `V - E + F`; 2 for anything topologically equivalent to a sphere.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.triangle_count as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outward_triangle_detected() {
        let v0 = DVec3::new(1.0, 0.0, 0.0);
        let v1 = DVec3::new(0.0, 1.0, 0.0);
        let v2 = DVec3::new(0.0, 0.0, 1.0);
        let outward = (v0 + v1 + v2) / 3.0;
        assert!(triangle_winds_outward(v0, v1, v2, outward));
        assert!(!triangle_winds_outward(v0, v2, v1, outward));
    }

    #[test]
    fn test_generated_meshes_are_closed_and_outward() {
        for n in 1..=6 {
            let mesh = CubeSphereMesh::new(n, 1.5).unwrap();
            let report = TopologyReport::analyze(&mesh);
            assert!(report.is_closed_manifold(), "N={n}: {report:?}");
            assert!(report.is_consistently_outward(), "N={n}: {report:?}");
            assert_eq!(report.euler_characteristic(), 2, "N={n}");
        }
    }

    #[test]
    fn test_edge_count_of_a_quad_mesh() {
        // Each quad contributes two triangles; a closed triangle mesh has
        // E = 3F / 2.
        let mesh = CubeSphereMesh::new(4, 1.0).unwrap();
        let report = TopologyReport::analyze(&mesh);
        assert_eq!(report.edge_count * 2, report.triangle_count * 3);
    }

    #[test]
    fn test_default_report_is_empty_manifold() {
        let report = TopologyReport::default();
        assert!(report.is_closed_manifold());
        assert_eq!(report.euler_characteristic(), 0);
    }
}
