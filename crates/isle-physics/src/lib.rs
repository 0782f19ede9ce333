//! Ground queries against generated terrain.
//!
//! Placement code only needs one question answered: "what surface lies
//! directly below this point?" [`GroundQuery`] is that seam. [`MeshCollider`]
//! answers it against a terrain mesh, and [`PropOverlay`] layers placed prop
//! footprints over any other implementation.

mod ground;
mod mesh_collider;
mod overlay;

pub use ground::{GroundHit, GroundQuery, SurfaceTag};
pub use mesh_collider::{MeshCollider, ray_triangle};
pub use overlay::{Obstacle, PropOverlay};
