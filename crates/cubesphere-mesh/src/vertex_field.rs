//! Vertex field: warped positions, normals, and lattice coordinates for every
//! lattice point on the cube's shell.

use serde::Serialize;
use tracing::warn;

use crate::lattice::ring_point;
use crate::params::{CubeSphereParams, MAX_LOSSLESS_LATTICE_RESOLUTION};
use crate::projection::lattice_to_sphere;

/// Per-vertex attributes stored as three parallel arrays.
///
/// Index `i` in each array describes the same vertex; the order is fixed by
/// [`generate_vertices`] and relied upon by the index builders.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VertexField {
    /// Positions on the sphere of the requested radius.
    pub positions: Vec<[f32; 3]>,
    /// Unit normals; `position == normal * radius`.
    pub normals: Vec<[f32; 3]>,
    /// Unbent lattice coordinates, wrapped to 8 bits.
    pub lattice_coords: Vec<[u8; 3]>,
}

impl VertexField {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            normals: Vec::with_capacity(capacity),
            lattice_coords: Vec::with_capacity(capacity),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the field holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn push_lattice_point(&mut self, lattice: [u32; 3], resolution: u32, radius: f32) {
        let normal = lattice_to_sphere(lattice, resolution).as_vec3();
        let position = normal * radius;

        self.normals.push(normal.to_array());
        self.positions.push(position.to_array());
        // Truncating cast: values above 255 wrap.
        self.lattice_coords.push(lattice.map(|c| c as u8));
    }
}

/// Generate the vertex field for `params`.
///
/// Emission order:
/// 1. for `y` in `0..=N`, the full ring at height `y` (see [`ring_point`]);
/// 2. the top cap interior `(x, N, z)`, `z` then `x` in `1..N`;
/// 3. the bottom cap interior `(x, 0, z)` in the same order.
///
/// Lattice coordinates wrap once `N` exceeds 255; a warning is logged but
/// geometry is unaffected.
pub fn generate_vertices(params: &CubeSphereParams) -> VertexField {
    let n = params.resolution();
    let radius = params.radius();

    if !params.lattice_is_lossless() {
        warn!(
            resolution = n,
            max = MAX_LOSSLESS_LATTICE_RESOLUTION,
            "lattice coordinates exceed 8 bits and will wrap"
        );
    }

    let mut field = VertexField::with_capacity(params.vertex_count());

    for y in 0..=n {
        for p in 0..params.ring_len() {
            let (x, z) = ring_point(n, p);
            field.push_lattice_point([x, y, z], n, radius);
        }
    }
    for cap_y in [n, 0] {
        for z in 1..n {
            for x in 1..n {
                field.push_lattice_point([x, cap_y, z], n, radius);
            }
        }
    }

    debug_assert_eq!(field.len(), params.vertex_count());
    field
}
