//! Cube-sphere mesh generation: lattice-to-sphere warp, ring and cap triangulation,
//! and topology validation of the resulting index buffers.
//!
//! A cube-sphere is a cube subdivided `N` times per edge whose surface lattice is
//! warped onto a sphere. [`CubeSphereMesh::generate`] produces one vertex field and
//! three index lists, one per [`IndexGroup`].

mod caps;
mod error;
mod index_group;
mod lattice;
mod mesh;
mod packed;
mod params;
mod projection;
mod quad;
mod sides;
mod vertex_field;
pub mod winding;

pub use caps::{build_bottom_cap, build_top_cap, generate_cap_indices};
pub use error::MeshError;
pub use index_group::IndexGroup;
pub use lattice::{CapLattice, ring_point, ring_position};
pub use mesh::{BoundingSphere, CubeSphereMesh};
pub use packed::{SphereVertex, pack_vertices, vertex_bytes};
pub use params::{CubeSphereParams, MAX_LOSSLESS_LATTICE_RESOLUTION, MAX_RESOLUTION};
pub use projection::{cube_to_sphere_everitt, lattice_to_cube_point, lattice_to_sphere};
pub use quad::{INDICES_PER_QUAD, push_quad};
pub use sides::generate_side_indices;
pub use vertex_field::{VertexField, generate_vertices};
pub use winding::{TopologyReport, triangle_winds_outward};
