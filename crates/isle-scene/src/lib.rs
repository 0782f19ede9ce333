//! Island scene assembly: prop and foliage placement, player spawn selection,
//! and the generate/clear lifecycle that ties the terrain pipeline together.

mod error;
mod placement;
mod world;

pub use error::GenerationError;
pub use placement::{PlacementLayer, PlacementOutcome, PropPlacement, PropPlacer, SpawnPoint};
pub use world::{GenerationReport, TerrainWorld};
