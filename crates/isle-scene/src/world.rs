//! Generate/clear lifecycle of one island.

use isle_config::Config;
use isle_mesh::{Aabb, MeshBuffers, TerrainVertex, build_terrain_mesh};
use isle_physics::MeshCollider;
use isle_terrain::{
    Biome, FalloffField, HeightField, JitterSequence, NoiseField, generate_falloff,
};
use rand::Rng;
use tracing::{info, warn};

use crate::error::GenerationError;
use crate::placement::{PlacementLayer, PropPlacement, PropPlacer, SpawnPoint};

/// Summary of one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    pub biome: Biome,
    pub width: usize,
    pub height: usize,
    pub vertices: usize,
    pub triangles: usize,
    /// Size of the interleaved vertex buffer handed to a renderer.
    pub vertex_buffer_bytes: usize,
    /// World-space bounds of the registered mesh.
    pub bounds: Aabb,
    pub props: usize,
    pub foliage: usize,
    pub prop_stride: usize,
    pub foliage_stride: usize,
    pub spawn: Option<SpawnPoint>,
    /// Props discarded by the clear that preceded this run.
    pub cleared: usize,
}

struct Generated {
    biome: Biome,
    heights: HeightField,
    falloff: FalloffField,
    mesh: MeshBuffers,
    collider: MeshCollider,
}

/// Owns the most recently generated terrain and everything placed on it.
#[derive(Default)]
pub struct TerrainWorld {
    noise: NoiseField,
    terrain: Option<Generated>,
    props: Vec<PropPlacement>,
    spawn: Option<SpawnPoint>,
}

impl TerrainWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the previous island and build a new one from `config`.
    ///
    /// `rng` drives octave offsets when the seed is zero, and every random
    /// choice made during placement.
    pub fn generate(
        &mut self,
        config: &Config,
        rng: &mut impl Rng,
    ) -> Result<GenerationReport, GenerationError> {
        let cleared = self.clear();

        let (width, height) = (config.map.width, config.map.height);
        if width == 0 || height == 0 {
            return Err(GenerationError::EmptyMap { width, height });
        }
        if width != height {
            return Err(GenerationError::NonSquareMap { width, height });
        }

        let biome = config.map.biome;
        let settings = config.active_biome();

        let heights = self.noise.generate(&config.noise_params(), rng);
        let falloff = generate_falloff(width, height, &config.map.falloff_curve);
        let mesh = build_terrain_mesh(
            &heights,
            &falloff,
            settings.height_multiplier,
            &config.map.height_curve,
            &settings.bands,
        );
        let collider = MeshCollider::from_mesh(&mesh);

        let jitter = JitterSequence::for_field_height(height);
        let outcome = PropPlacer::new(&settings.bands, biome, &config.placement, &jitter)
            .place(&mesh, &collider, rng);

        let report = GenerationReport {
            biome,
            width,
            height,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            vertex_buffer_bytes: TerrainVertex::slice_as_bytes(&mesh.packed_vertices()).len(),
            bounds: mesh.world_bounds(),
            props: outcome.count(PlacementLayer::Prop),
            foliage: outcome.count(PlacementLayer::Foliage),
            prop_stride: outcome.prop_stride,
            foliage_stride: outcome.foliage_stride,
            spawn: outcome.spawn,
            cleared,
        };

        info!(
            biome = biome.name(),
            seed = config.map.seed,
            width,
            height,
            props = report.props,
            foliage = report.foliage,
            "Generated island"
        );
        if outcome.spawn.is_none() {
            warn!("No player spawn found");
        }

        self.props = outcome.props;
        self.spawn = outcome.spawn;
        self.terrain = Some(Generated {
            biome,
            heights,
            falloff,
            mesh,
            collider,
        });

        Ok(report)
    }

    /// Drop the terrain, its placements and the spawn point.
    ///
    /// Returns how many placements were discarded; clearing an empty world
    /// returns `0` and changes nothing.
    pub fn clear(&mut self) -> usize {
        let discarded = self.props.len();
        self.props.clear();
        self.spawn = None;
        self.terrain = None;
        discarded
    }

    pub fn is_empty(&self) -> bool {
        self.terrain.is_none()
    }

    pub fn biome(&self) -> Option<Biome> {
        self.terrain.as_ref().map(|t| t.biome)
    }

    pub fn heights(&self) -> Option<&HeightField> {
        self.terrain.as_ref().map(|t| &t.heights)
    }

    pub fn falloff(&self) -> Option<&FalloffField> {
        self.terrain.as_ref().map(|t| &t.falloff)
    }

    pub fn mesh(&self) -> Option<&MeshBuffers> {
        self.terrain.as_ref().map(|t| &t.mesh)
    }

    pub fn collider(&self) -> Option<&MeshCollider> {
        self.terrain.as_ref().map(|t| &t.collider)
    }

    pub fn props(&self) -> &[PropPlacement] {
        &self.props
    }

    pub fn spawn(&self) -> Option<SpawnPoint> {
        self.spawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isle_terrain::seeded_rng;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.map.width = 16;
        config.map.height = 16;
        config.map.seed = 42;
        config
    }

    #[test]
    fn test_new_world_is_empty() {
        let world = TerrainWorld::new();
        assert!(world.is_empty());
        assert!(world.mesh().is_none());
        assert!(world.props().is_empty());
    }

    #[test]
    fn test_generate_populates_world() {
        let mut world = TerrainWorld::new();
        let report = world.generate(&small_config(), &mut seeded_rng(1)).unwrap();
        assert_eq!(report.vertices, 17 * 17);
        assert_eq!(report.triangles, 16 * 16 * 2);
        assert_eq!(report.vertex_buffer_bytes, 17 * 17 * 36);
        assert_eq!(report.bounds.min.x, 0.0);
        assert_eq!(report.bounds.max.x, 16.0 * 16.0);
        assert_eq!(report.cleared, 0);
        assert_eq!(world.props().len(), report.props + report.foliage);
        assert_eq!(world.spawn(), report.spawn);
        assert_eq!(world.biome(), Some(Biome::Forest));
        assert_eq!(world.heights().unwrap().width(), 16);
        assert!(world.collider().is_some());
    }

    #[test]
    fn test_regenerate_replaces_previous_props() {
        let mut world = TerrainWorld::new();
        world.generate(&small_config(), &mut seeded_rng(1)).unwrap();
        let before = world.props().len();
        let report = world.generate(&small_config(), &mut seeded_rng(1)).unwrap();
        assert_eq!(report.cleared, before);
        assert_eq!(world.props().len(), before);
    }

    #[test]
    fn test_non_square_map_is_rejected() {
        let mut config = small_config();
        config.map.height = 8;
        let mut world = TerrainWorld::new();
        let err = world.generate(&config, &mut seeded_rng(1)).unwrap_err();
        assert_eq!(err, GenerationError::NonSquareMap { width: 16, height: 8 });
        assert!(world.is_empty());
    }

    #[test]
    fn test_empty_map_is_rejected() {
        let mut config = small_config();
        config.map.width = 0;
        let mut world = TerrainWorld::new();
        assert!(matches!(
            world.generate(&config, &mut seeded_rng(1)),
            Err(GenerationError::EmptyMap { .. })
        ));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut world = TerrainWorld::new();
        world.generate(&small_config(), &mut seeded_rng(1)).unwrap();
        let count = world.props().len();
        assert_eq!(world.clear(), count);
        assert!(world.is_empty());
        assert_eq!(world.clear(), 0);
        assert!(world.props().is_empty());
        assert!(world.spawn().is_none());
    }
}
