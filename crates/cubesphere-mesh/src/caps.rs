//! Triangulation of the top and bottom caps.
//!
//! Each cap is a logical `(N + 1) x (N + 1)` grid whose perimeter lives in a ring
//! and whose interior lives in a separate block; [`CapLattice`] resolves both.
//! The two caps face opposite ways and their rings run in opposite directions
//! when seen from outside, so each builder derives its own quad corners.

use crate::lattice::CapLattice;
use crate::quad::{INDICES_PER_QUAD, push_quad};

/// Triangulate the top cap (`y = N`), facing `+Y`.
///
/// Perimeter vertices come from the ring starting at `N * 4N`; interior ones
/// from the block right after the last ring.
pub fn build_top_cap(resolution: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(cap_index_count(resolution));
    push_top_cap(&mut indices, resolution);
    indices
}

/// Triangulate the bottom cap (`y = 0`), facing `-Y`.
///
/// Perimeter vertices come from the first ring; interior ones from the block
/// after the top cap's interior.
pub fn build_bottom_cap(resolution: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(cap_index_count(resolution));
    push_bottom_cap(&mut indices, resolution);
    indices
}

/// The Y-group index list: the top cap followed by the bottom cap.
pub fn generate_cap_indices(resolution: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(2 * cap_index_count(resolution));
    push_top_cap(&mut indices, resolution);
    push_bottom_cap(&mut indices, resolution);
    indices
}

fn cap_index_count(resolution: u32) -> usize {
    let n = resolution as usize;
    n * n * INDICES_PER_QUAD
}

fn push_top_cap(indices: &mut Vec<u32>, resolution: u32) {
    let cap = CapLattice::top(resolution);
    for z in 0..resolution {
        for x in 0..resolution {
            push_quad(
                indices,
                cap.index(x, z),
                cap.index(x + 1, z),
                cap.index(x, z + 1),
                cap.index(x + 1, z + 1),
            );
        }
    }
}

fn push_bottom_cap(indices: &mut Vec<u32>, resolution: u32) {
    let cap = CapLattice::bottom(resolution);
    // Rows mirrored: the quad's bottom edge is the far row, which flips the
    // winding to face -Y.
    for z in 0..resolution {
        for x in 0..resolution {
            push_quad(
                indices,
                cap.index(x, z + 1),
                cap.index(x + 1, z + 1),
                cap.index(x, z),
                cap.index(x + 1, z),
            );
        }
    }
}
