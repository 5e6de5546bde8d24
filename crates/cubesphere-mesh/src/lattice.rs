//! Addressing of lattice points inside the linear vertex buffer.
//!
//! Rings are stored one after another, `4N` vertices each, walking the cube's
//! perimeter at a fixed height:
//!
//! ```text
//!        x=0 <---- z=N ---- x=N
//!         |                  ^
//!  z=N-1..1                  z=1..N
//!         v                  |
//!        x=0 ---- z=0 ----> x=N
//! ```
//!
//! Cap interiors follow all rings, top cap first, row-major by `z` then `x`.
//! A [`CapLattice`] stitches a cap's ring and interior block back together into
//! one `(N + 1) x (N + 1)` grid.

/// Lattice `(x, z)` of position `p` along a ring (`0 <= p < 4N`).
#[inline]
#[must_use]
pub fn ring_point(resolution: u32, position: u32) -> (u32, u32) {
    let n = resolution;
    debug_assert!(position < 4 * n, "ring position {position} out of range");
    if position <= n {
        (position, 0)
    } else if position <= 2 * n {
        (n, position - n)
    } else if position <= 3 * n {
        (3 * n - position, n)
    } else {
        (0, 4 * n - position)
    }
}

/// Position along a ring of the perimeter lattice point `(x, z)`.
///
/// Returns `None` for points strictly inside the cap or outside the lattice.
#[inline]
#[must_use]
pub fn ring_position(resolution: u32, x: u32, z: u32) -> Option<u32> {
    let n = resolution;
    if x > n || z > n {
        None
    } else if z == 0 {
        Some(x)
    } else if x == n {
        Some(n + z)
    } else if z == n {
        Some(3 * n - x)
    } else if x == 0 {
        Some(4 * n - z)
    } else {
        None
    }
}

/// One cap viewed as an `(N + 1) x (N + 1)` grid over two disjoint index ranges.
///
/// Perimeter points resolve into the cap's ring, interior points into the cap's
/// interior block with a row stride of `N - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapLattice {
    resolution: u32,
    ring_offset: u32,
    interior_offset: u32,
}

impl CapLattice {
    /// The top cap: the last ring (`y = N`) and the first interior block.
    pub fn top(resolution: u32) -> Self {
        let ring = 4 * resolution;
        Self {
            resolution,
            ring_offset: resolution * ring,
            interior_offset: (resolution + 1) * ring,
        }
    }

    /// The bottom cap: the first ring (`y = 0`) and the interior block after the top's.
    pub fn bottom(resolution: u32) -> Self {
        let ring = 4 * resolution;
        let interior = (resolution - 1) * (resolution - 1);
        Self {
            resolution,
            ring_offset: 0,
            interior_offset: (resolution + 1) * ring + interior,
        }
    }

    /// Index of the cap's first ring vertex, lattice `(0, 0)`.
    pub fn ring_offset(&self) -> u32 {
        self.ring_offset
    }

    /// Index of the cap's first interior vertex, lattice `(1, 1)`.
    pub fn interior_offset(&self) -> u32 {
        self.interior_offset
    }

    /// Vertex index of cap lattice point `(x, z)`, both in `0..=N`.
    #[inline]
    pub fn index(&self, x: u32, z: u32) -> u32 {
        let n = self.resolution;
        debug_assert!(x <= n && z <= n);
        match ring_position(n, x, z) {
            Some(p) => self.ring_offset + p,
            None => self.interior_offset + (z - 1) * (n - 1) + (x - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_walk_order() {
        let walk: Vec<_> = (0..8).map(|p| ring_point(2, p)).collect();
        assert_eq!(
            walk,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (2, 2),
                (1, 2),
                (0, 2),
                (0, 1)
            ]
        );
    }

    #[test]
    fn test_ring_point_and_position_are_inverse() {
        for n in 1..=9 {
            for p in 0..4 * n {
                let (x, z) = ring_point(n, p);
                assert_eq!(ring_position(n, x, z), Some(p), "N={n} p={p}");
            }
        }
    }

    #[test]
    fn test_ring_neighbours_are_adjacent() {
        // Consecutive ring positions, including the wrap from 4N-1 back to 0,
        // are one lattice step apart.
        for n in 1..=6 {
            let ring = 4 * n;
            for p in 0..ring {
                let (x0, z0) = ring_point(n, p);
                let (x1, z1) = ring_point(n, (p + 1) % ring);
                assert_eq!(x0.abs_diff(x1) + z0.abs_diff(z1), 1, "N={n} p={p}");
            }
        }
    }

    #[test]
    fn test_interior_points_have_no_ring_position() {
        assert_eq!(ring_position(3, 1, 1), None);
        assert_eq!(ring_position(3, 2, 1), None);
        assert_eq!(ring_position(3, 4, 0), None);
    }

    #[test]
    fn test_top_cap_offsets() {
        let cap = CapLattice::top(3);
        assert_eq!(cap.ring_offset(), 36);
        assert_eq!(cap.interior_offset(), 48);
        assert_eq!(cap.index(0, 0), 36);
        assert_eq!(cap.index(1, 1), 48);
        assert_eq!(cap.index(2, 2), 51);
        // The first interior row's left neighbour is the last vertex of the ring.
        assert_eq!(cap.index(0, 1), 47);
    }

    #[test]
    fn test_bottom_cap_offsets() {
        let cap = CapLattice::bottom(3);
        assert_eq!(cap.ring_offset(), 0);
        assert_eq!(cap.interior_offset(), 52);
        assert_eq!(cap.index(0, 1), 11);
        assert_eq!(cap.index(1, 0), 1);
        assert_eq!(cap.index(2, 1), 53);
        assert_eq!(cap.index(3, 3), 6);
    }

    #[test]
    fn test_cap_indices_are_a_bijection() {
        for n in 1..=7 {
            let vertex_count = 6 * n * n + 2;
            for cap in [CapLattice::top(n), CapLattice::bottom(n)] {
                let mut seen = std::collections::HashSet::new();
                for z in 0..=n {
                    for x in 0..=n {
                        let i = cap.index(x, z);
                        assert!(i < vertex_count);
                        assert!(seen.insert(i), "N={n} duplicate index {i}");
                    }
                }
                assert_eq!(seen.len() as u32, (n + 1) * (n + 1));
            }
        }
    }

    #[test]
    fn test_single_subdivision_caps_use_only_rings() {
        let top = CapLattice::top(1);
        let corners: Vec<_> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .iter()
            .map(|&(x, z)| top.index(x, z))
            .collect();
        assert_eq!(corners, vec![4, 5, 7, 6]);

        let bottom = CapLattice::bottom(1);
        let corners: Vec<_> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .iter()
            .map(|&(x, z)| bottom.index(x, z))
            .collect();
        assert_eq!(corners, vec![0, 1, 3, 2]);
    }
}
