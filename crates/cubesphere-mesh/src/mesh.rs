//! The assembled cube-sphere: one vertex field and three index lists.

use serde::Serialize;
use tracing::debug;

use crate::caps::generate_cap_indices;
use crate::error::MeshError;
use crate::index_group::IndexGroup;
use crate::packed::{SphereVertex, pack_vertices};
use crate::params::CubeSphereParams;
use crate::sides::generate_side_indices;
use crate::vertex_field::{VertexField, generate_vertices};

/// A sphere enclosing the mesh, the natural collision proxy for a cube-sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingSphere {
    /// Centre in mesh-local space.
    pub center: [f32; 3],
    /// Radius.
    pub radius: f32,
}

/// Output of one generation pass.
///
/// Immutable once built; changing the resolution or radius means generating a
/// new mesh.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CubeSphereMesh {
    params: CubeSphereParams,
    vertices: VertexField,
    z_indices: Vec<u32>,
    x_indices: Vec<u32>,
    y_indices: Vec<u32>,
}

impl CubeSphereMesh {
    /// Validate `resolution` and `radius`, then generate.
    pub fn new(resolution: u32, radius: f32) -> Result<Self, MeshError> {
        Ok(Self::generate(CubeSphereParams::new(resolution, radius)?))
    }

    /// Generate the vertex field, then derive all three index lists from the
    /// resolution alone.
    pub fn generate(params: CubeSphereParams) -> Self {
        let vertices = generate_vertices(&params);
        let (z_indices, x_indices) = generate_side_indices(params.resolution());
        let y_indices = generate_cap_indices(params.resolution());

        debug!(
            resolution = params.resolution(),
            radius = params.radius(),
            vertices = vertices.len(),
            z = z_indices.len(),
            x = x_indices.len(),
            y = y_indices.len(),
            "cube-sphere generated"
        );

        Self {
            params,
            vertices,
            z_indices,
            x_indices,
            y_indices,
        }
    }

    /// Parameters this mesh was generated from.
    pub fn params(&self) -> &CubeSphereParams {
        &self.params
    }

    /// The full vertex field.
    pub fn vertices(&self) -> &VertexField {
        &self.vertices
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.vertices.positions
    }

    /// Unit vertex normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.vertices.normals
    }

    /// Per-vertex lattice coordinates.
    pub fn lattice_coords(&self) -> &[[u8; 3]] {
        &self.vertices.lattice_coords
    }

    /// Index list of one orientation group.
    pub fn indices(&self, group: IndexGroup) -> &[u32] {
        match group {
            IndexGroup::Z => &self.z_indices,
            IndexGroup::X => &self.x_indices,
            IndexGroup::Y => &self.y_indices,
        }
    }

    /// Triangles of one group as index triples.
    pub fn triangles(&self, group: IndexGroup) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices(group)
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles across all groups.
    pub fn triangle_count(&self) -> usize {
        IndexGroup::ALL
            .iter()
            .map(|&g| self.indices(g).len() / 3)
            .sum()
    }

    /// The sphere every vertex lies on.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere {
            center: [0.0; 3],
            radius: self.params.radius(),
        }
    }

    /// Interleaved vertices in index order.
    pub fn packed_vertices(&self) -> Vec<SphereVertex> {
        pack_vertices(&self.vertices)
    }

    /// Returns one group's index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self, group: IndexGroup) -> &[u8] {
        bytemuck::cast_slice(self.indices(group))
    }
}
