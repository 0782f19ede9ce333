use glam::Vec3;
use isle_config::{Config, PlacementConfig};
use isle_mesh::build_terrain_mesh;
use isle_physics::{GroundQuery, MeshCollider, SurfaceTag};
use isle_scene::{PlacementLayer, PropPlacer, TerrainWorld};
use isle_terrain::{Biome, CurveShape, Field, JitterSequence, default_bands, seeded_rng};

fn config(size: usize, seed: i32, biome: Biome) -> Config {
    let mut config = Config::default();
    config.map.width = size;
    config.map.height = size;
    config.map.seed = seed;
    config.map.biome = biome;
    config
}

#[test]
fn flat_zero_terrain_has_no_props_and_no_spawn() {
    let heights = Field::filled(10, 10, 0.0);
    let falloff = Field::filled(10, 10, 0.0);
    let bands = default_bands(Biome::Forest);
    let mesh = build_terrain_mesh(&heights, &falloff, 1.0, &CurveShape::Linear, &bands);
    assert!(mesh.positions.iter().all(|p| p.y == 0.0));

    let collider = MeshCollider::from_mesh(&mesh);
    let settings = PlacementConfig::default();
    let jitter = JitterSequence::for_field_height(10);
    let outcome = PropPlacer::new(&bands, Biome::Forest, &settings, &jitter).place(
        &mesh,
        &collider,
        &mut seeded_rng(0),
    );
    assert!(outcome.props.is_empty());
    assert!(outcome.spawn.is_none());
}

#[test]
fn generated_fields_and_mesh_are_consistent() {
    let mut world = TerrainWorld::new();
    let report = world
        .generate(&config(32, 1234, Biome::Forest), &mut seeded_rng(9))
        .unwrap();

    let heights = world.heights().unwrap();
    let (min, max) = heights.min_max().unwrap();
    assert_eq!((min, max), (0.0, 1.0));
    assert!(world.falloff().unwrap().values().iter().all(|v| (0.0..=1.0).contains(v)));

    let mesh = world.mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 33 * 33);
    assert_eq!(mesh.indices.len(), 32 * 32 * 6);
    assert_eq!(report.vertices, mesh.vertex_count());
}

#[test]
fn placements_rest_on_the_terrain() {
    let mut world = TerrainWorld::new();
    world
        .generate(&config(32, 77, Biome::Forest), &mut seeded_rng(3))
        .unwrap();
    let mesh = world.mesh().unwrap();
    let collider = world.collider().unwrap();

    for p in world.props() {
        assert!(mesh.elevation(p.vertex_index) > 0.0);
        assert!((0.0..360.0).contains(&p.rotation_degrees));
        let base = mesh.world_position(p.vertex_index);
        let hit = collider.query(base).unwrap();
        assert_eq!(hit.surface, SurfaceTag::Terrain);
        assert!((p.position.y - hit.point.y).abs() < 1e-3);
    }
}

#[test]
fn spawn_lies_within_allowed_elevation() {
    // A flat 0.3 surface under the island falloff keeps the whole interior
    // between sea level and the spawn ceiling, so a spawn always exists.
    let mut config = config(48, 500, Biome::Forest);
    config.map.height_curve = CurveShape::Constant(0.3);
    let mut world = TerrainWorld::new();
    let report = world.generate(&config, &mut seeded_rng(4)).unwrap();

    let spawn = report.spawn.unwrap();
    assert_eq!(world.spawn(), Some(spawn));
    let mesh = world.mesh().unwrap();
    let elevation = mesh.elevation(spawn.vertex_index);
    assert!(elevation > 0.0 && elevation <= config.placement.spawn_max_elevation);

    let offset = Vec3::from_array(config.placement.spawn_offset);
    let ground = spawn.position - offset;
    assert!((ground - mesh.world_position(spawn.vertex_index)).length() < 1e-2);
    assert!(
        world
            .props()
            .iter()
            .all(|p| !p.obstacle().covers(ground)),
        "spawn landed on a prop"
    );
}

#[test]
fn identical_inputs_reproduce_the_island() {
    let config = config(24, 0, Biome::Desert);
    let mut a = TerrainWorld::new();
    let mut b = TerrainWorld::new();
    let ra = a.generate(&config, &mut seeded_rng(11)).unwrap();
    let rb = b.generate(&config, &mut seeded_rng(11)).unwrap();
    assert_eq!(ra, rb);
    assert_eq!(a.heights(), b.heights());
    assert_eq!(a.props(), b.props());
}

#[test]
fn foliage_matches_biome() {
    let config = config(24, 321, Biome::Desert);
    let mut world = TerrainWorld::new();
    world.generate(&config, &mut seeded_rng(2)).unwrap();
    for p in world.props().iter().filter(|p| p.layer == PlacementLayer::Foliage) {
        assert_eq!(p.kind.name, config.placement.foliage.desert.name);
    }
}

#[test]
fn clearing_twice_is_a_no_op() {
    let mut world = TerrainWorld::new();
    world
        .generate(&config(16, 5, Biome::Forest), &mut seeded_rng(1))
        .unwrap();
    world.clear();
    assert_eq!(world.clear(), 0);
    assert!(world.props().is_empty());
    assert!(world.mesh().is_none());
}
