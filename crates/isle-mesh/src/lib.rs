//! Terrain meshing: grid triangulation of height fields, normals, bounds and
//! GPU-ready vertex packing.

pub mod bounds;
pub mod normals;
pub mod terrain_mesh;
pub mod vertex_format;

pub use bounds::Aabb;
pub use normals::recalculate_normals;
pub use terrain_mesh::{MeshBuffers, build_terrain_mesh, grid_indices};
pub use vertex_format::TerrainVertex;
