//! Validated generation parameters and the buffer sizes they imply.

use serde::Serialize;

use crate::error::MeshError;

/// Largest accepted resolution.
///
/// At this resolution the mesh has `6 * N^2 + 2` (about 1.6 billion) vertices,
/// which still leaves headroom below `u32::MAX` for index arithmetic.
pub const MAX_RESOLUTION: u32 = 16_384;

/// Largest resolution whose lattice coordinates fit in a `u8` without wrapping.
pub const MAX_LOSSLESS_LATTICE_RESOLUTION: u32 = u8::MAX as u32;

/// Immutable parameters of one generation pass.
///
/// The fields are private so that a value of this type is always valid:
/// `resolution` is in `1..=MAX_RESOLUTION` and `radius` is positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CubeSphereParams {
    resolution: u32,
    radius: f32,
}

impl CubeSphereParams {
    /// Validate and construct generation parameters.
    ///
    /// `resolution` is the number of subdivisions per cube edge and `radius`
    /// the uniform scale applied after warping.
    pub fn new(resolution: u32, radius: f32) -> Result<Self, MeshError> {
        if resolution < 1 {
            return Err(MeshError::InvalidResolution(resolution));
        }
        if resolution > MAX_RESOLUTION {
            return Err(MeshError::ResolutionTooLarge {
                resolution,
                max: MAX_RESOLUTION,
            });
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(MeshError::InvalidRadius(radius));
        }
        Ok(Self { resolution, radius })
    }

    /// Subdivisions per cube edge (`N`).
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of vertices in one horizontal ring, `4N`.
    ///
    /// This is also the index stride between vertically adjacent rings.
    pub fn ring_len(&self) -> u32 {
        4 * self.resolution
    }

    /// Interior lattice points of one cap, `(N - 1)^2`.
    pub fn cap_interior_len(&self) -> u32 {
        (self.resolution - 1) * (self.resolution - 1)
    }

    /// Total vertex count: corners, edge points, and the interiors of all six faces.
    pub fn vertex_count(&self) -> usize {
        let n = self.resolution as usize;
        let corners = 8;
        let edges = 4 * (3 * n - 3);
        let faces = 6 * (n - 1) * (n - 1);
        corners + edges + faces
    }

    /// Quads in each of the three index groups, `2N^2`.
    pub fn quads_per_group(&self) -> usize {
        let n = self.resolution as usize;
        2 * n * n
    }

    /// Length of each of the three index lists.
    pub fn group_index_count(&self) -> usize {
        self.quads_per_group() * crate::quad::INDICES_PER_QUAD
    }

    /// Whether every lattice coordinate fits in a `u8` without wrapping.
    pub fn lattice_is_lossless(&self) -> bool {
        self.resolution <= MAX_LOSSLESS_LATTICE_RESOLUTION
    }
}
