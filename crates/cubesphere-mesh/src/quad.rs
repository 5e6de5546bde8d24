//! The quad primitive shared by every triangulation routine.

/// Indices emitted per quad: two triangles of three.
pub const INDICES_PER_QUAD: usize = 6;

/// Append the quad `a-b-c-d` as the triangles `(a, c, b)` and `(b, c, d)`.
///
/// ```text
/// c------d
/// |      |
/// |      |
/// a------b
/// ```
///
/// Both triangles wind the same way, so a quad whose `a→b` and `a→c` edges
/// follow the builders' conventions faces outward.
#[inline]
pub fn push_quad(indices: &mut Vec<u32>, a: u32, b: u32, c: u32, d: u32) {
    indices.extend_from_slice(&[a, c, b, b, c, d]);
}
