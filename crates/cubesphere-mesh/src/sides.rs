//! Triangulation of the four belt faces between consecutive rings.

use crate::quad::{INDICES_PER_QUAD, push_quad};

/// Emit the Z-group and X-group index lists for the belt faces.
///
/// Each layer `y` in `0..N` walks one ring of `4N` quads: `N` on the `z = 0`
/// face (Z), `N` on `x = N` (X), `N` on `z = N` (Z), `N - 1` on `x = 0` (X),
/// and one closing quad (X) that reconnects the ring's last column to its
/// first. Both lists end up with `2N` quads per layer.
pub fn generate_side_indices(resolution: u32) -> (Vec<u32>, Vec<u32>) {
    let n = resolution;
    let ring = 4 * n;
    let capacity = 2 * (n as usize) * (n as usize) * INDICES_PER_QUAD;
    let mut z_indices = Vec::with_capacity(capacity);
    let mut x_indices = Vec::with_capacity(capacity);

    for y in 0..n {
        let mut v = y * ring;
        for _ in 0..n {
            push_ring_quad(&mut z_indices, v, ring);
            v += 1;
        }
        for _ in 0..n {
            push_ring_quad(&mut x_indices, v, ring);
            v += 1;
        }
        for _ in 0..n {
            push_ring_quad(&mut z_indices, v, ring);
            v += 1;
        }
        for _ in 0..n - 1 {
            push_ring_quad(&mut x_indices, v, ring);
            v += 1;
        }
        // The ring is stored linearly: the column after `v` is the first vertex
        // of this ring, not `v + 1`, which already belongs to the next ring.
        push_quad(&mut x_indices, v, v + 1 - ring, v + ring, v + 1);
    }

    (z_indices, x_indices)
}

#[inline]
fn push_ring_quad(indices: &mut Vec<u32>, v: u32, ring: u32) {
    push_quad(indices, v, v + 1, v + ring, v + ring + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sizes() {
        for n in 1..=10u32 {
            let (z, x) = generate_side_indices(n);
            let expected = (12 * n * n) as usize;
            assert_eq!(z.len(), expected, "N={n} z");
            assert_eq!(x.len(), expected, "N={n} x");
        }
    }

    #[test]
    fn test_indices_stay_within_rings() {
        for n in 1..=6u32 {
            let ring_vertices = 4 * n * (n + 1);
            let (z, x) = generate_side_indices(n);
            for &i in z.iter().chain(&x) {
                assert!(i < ring_vertices, "N={n} index {i} outside rings");
            }
        }
    }

    #[test]
    fn test_single_subdivision() {
        let (z, x) = generate_side_indices(1);
        // Front quad 0-1 and back quad 2-3, both lifted by the 4-vertex stride.
        assert_eq!(z, vec![0, 4, 1, 1, 4, 5, 2, 6, 3, 3, 6, 7]);
        // Right quad 1-2, then the closing quad 3-0.
        assert_eq!(x, vec![1, 5, 2, 2, 5, 6, 3, 7, 0, 0, 7, 4]);
    }

    #[test]
    fn test_closing_quad_wraps_to_ring_start() {
        let n = 3;
        let ring = 4 * n;
        let (_, x) = generate_side_indices(n);
        let quads_per_layer = 2 * n as usize;
        for y in 0..n {
            let start = (y as usize + 1) * quads_per_layer * INDICES_PER_QUAD - INDICES_PER_QUAD;
            let closing = &x[start..start + INDICES_PER_QUAD];
            let last = y * ring + ring - 1;
            let first = y * ring;
            assert_eq!(
                closing,
                &[last, last + ring, first, first, last + ring, first + ring]
            );
        }
    }

    #[test]
    fn test_no_quad_crosses_into_next_ring_sideways() {
        // Apart from the vertical stride, every quad spans two adjacent columns
        // of the same ring.
        let n = 4;
        let ring = 4 * n;
        let (z, x) = generate_side_indices(n);
        for quad in z.chunks_exact(INDICES_PER_QUAD).chain(x.chunks_exact(INDICES_PER_QUAD)) {
            let (a, b) = (quad[0], quad[2]);
            assert_eq!(a / ring, b / ring, "quad {quad:?} leaves its ring");
        }
    }
}
