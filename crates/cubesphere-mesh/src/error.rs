//! Errors raised while validating cube-sphere generation parameters.

/// Reasons a cube-sphere cannot be generated.
///
/// Every variant is produced by [`crate::CubeSphereParams::new`], before any
/// buffer is allocated, so there is never a partially built mesh.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// The resolution was zero.
    #[error("resolution must be at least 1, got {0}")]
    InvalidResolution(u32),

    /// The resolution would produce more vertices than `u32` indices can address.
    #[error("resolution {resolution} exceeds the maximum of {max}")]
    ResolutionTooLarge {
        /// The rejected resolution.
        resolution: u32,
        /// The largest accepted resolution.
        max: u32,
    },

    /// The radius was zero, negative, or not finite.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}
