//! Interleaved vertex format for GPU upload.
//!
//! [`SphereVertex`] packs one vertex of a [`VertexField`] into 28 bytes. The
//! lattice coordinate travels as an RGBA8 colour with alpha fixed at 0, which
//! lets hosts feed it through a standard colour attribute.

use crate::vertex_field::VertexField;

/// A single interleaved cube-sphere vertex.
///
/// Layout (28 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..28]` lattice `[u8; 4]` — `(x, y, z, 0)`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the sphere.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Lattice coordinate; the fourth byte is always 0.
    pub lattice: [u8; 4],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 28]);

impl SphereVertex {
    /// Construct a packed vertex from its unpacked attributes.
    pub fn new(position: [f32; 3], normal: [f32; 3], lattice: [u8; 3]) -> Self {
        let [x, y, z] = lattice;
        Self {
            position,
            normal,
            lattice: [x, y, z, 0],
        }
    }

    /// The lattice coordinate without the padding byte.
    pub fn lattice_coord(&self) -> [u8; 3] {
        [self.lattice[0], self.lattice[1], self.lattice[2]]
    }
}

/// Interleave a vertex field into packed vertices, preserving order.
pub fn pack_vertices(field: &VertexField) -> Vec<SphereVertex> {
    field
        .positions
        .iter()
        .zip(&field.normals)
        .zip(&field.lattice_coords)
        .map(|((&position, &normal), &lattice)| SphereVertex::new(position, normal, lattice))
        .collect()
}

/// Returns the packed vertices as a byte slice for GPU upload (zero-copy).
pub fn vertex_bytes(vertices: &[SphereVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
