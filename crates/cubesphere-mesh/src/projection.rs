//! Cube-lattice to sphere warp.
//!
//! Lattice points on the shell of the `[0, N]^3` cube are first centred onto the
//! `[-1, 1]` cube and then pushed onto the unit sphere with the Everitt mapping,
//! which spreads vertices far more evenly than plain normalization.

use glam::DVec3;

/// Map an integer lattice point in `[0, N]^3` onto the `[-1, 1]` cube.
///
/// The scale is applied as `c * 2 / N` so that `c == N` lands exactly on `1.0`.
#[inline]
#[must_use]
pub fn lattice_to_cube_point(lattice: [u32; 3], resolution: u32) -> DVec3 {
    let [x, y, z] = lattice;
    DVec3::new(x as f64, y as f64, z as f64) * 2.0 / resolution as f64 - DVec3::ONE
}

/// Analytic cube-to-sphere using the Everitt/Mathworld mapping.
///
/// Given a point on the cube surface (one coordinate is `±1`), compute the
/// corresponding unit sphere point with minimal area distortion:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
#[inline]
#[must_use]
pub fn cube_to_sphere_everitt(cube_point: DVec3) -> DVec3 {
    let x2 = cube_point.x * cube_point.x;
    let y2 = cube_point.y * cube_point.y;
    let z2 = cube_point.z * cube_point.z;

    DVec3::new(
        cube_point.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).sqrt(),
        cube_point.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).sqrt(),
        cube_point.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).sqrt(),
    )
}

/// Convenience: lattice point → unit sphere using the Everitt mapping.
#[inline]
#[must_use]
pub fn lattice_to_sphere(lattice: [u32; 3], resolution: u32) -> DVec3 {
    cube_to_sphere_everitt(lattice_to_cube_point(lattice, resolution))
}
