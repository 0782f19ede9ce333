//! Stride-based prop and foliage scattering plus player spawn selection.
//!
//! Every pass walks the mesh vertices in index order, advancing by a stride
//! drawn from the divisors of the mesh scale. The advance happens after every
//! visited vertex, whether or not anything was placed there, so placements
//! along the walk are never closer than one stride apart.

use glam::Vec3;
use isle_config::PlacementConfig;
use isle_mesh::MeshBuffers;
use isle_physics::{GroundQuery, Obstacle, PropOverlay, SurfaceTag};
use isle_terrain::{Biome, DivisorStride, JitterSequence, PropKind, ScaleRule, TerrainBand, classify};
use rand::Rng;
use tracing::debug;

/// Scale range of [`ScaleRule::Wide`] props.
const WIDE_SCALE_MIN: f32 = 0.5;
const WIDE_SCALE_MAX: f32 = 4.0;

/// Which pass produced a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementLayer {
    /// Band props such as trees and rocks.
    Prop,
    /// Biome ground cover.
    Foliage,
}

/// A single placed object.
#[derive(Clone, Debug, PartialEq)]
pub struct PropPlacement {
    pub kind: PropKind,
    /// World-space base position.
    pub position: Vec3,
    /// Rotation about the up axis, in `[0, 360)`.
    pub rotation_degrees: f32,
    pub scale: f32,
    /// Terrain normal under the prop.
    pub surface_normal: Vec3,
    /// Mesh vertex the placement was derived from.
    pub vertex_index: usize,
    pub layer: PlacementLayer,
}

impl PropPlacement {
    /// Footprint of this placement as seen by ground queries.
    pub fn obstacle(&self) -> Obstacle {
        Obstacle {
            center: self.position,
            radius: self.kind.footprint_radius * self.scale,
        }
    }
}

/// Where the player actor starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoint {
    /// World-space position, already including the spawn offset.
    pub position: Vec3,
    pub vertex_index: usize,
}

/// Everything one placement run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementOutcome {
    /// Props first, then foliage, each in vertex order.
    pub props: Vec<PropPlacement>,
    pub spawn: Option<SpawnPoint>,
    pub prop_stride: usize,
    pub foliage_stride: usize,
}

impl PlacementOutcome {
    pub fn count(&self, layer: PlacementLayer) -> usize {
        self.props.iter().filter(|p| p.layer == layer).count()
    }
}

/// Scatters band props and foliage over a terrain mesh and picks a spawn.
pub struct PropPlacer<'a> {
    bands: &'a [TerrainBand],
    biome: Biome,
    settings: &'a PlacementConfig,
    jitter: &'a JitterSequence,
}

impl<'a> PropPlacer<'a> {
    pub fn new(
        bands: &'a [TerrainBand],
        biome: Biome,
        settings: &'a PlacementConfig,
        jitter: &'a JitterSequence,
    ) -> Self {
        Self {
            bands,
            biome,
            settings,
            jitter,
        }
    }

    /// Run the prop pass, the foliage pass and the spawn scan.
    ///
    /// `ground` is only read. The spawn scan sees the props placed by this
    /// call as obstacles layered over it.
    pub fn place(
        &self,
        mesh: &MeshBuffers,
        ground: &impl GroundQuery,
        rng: &mut impl Rng,
    ) -> PlacementOutcome {
        let strides = DivisorStride::new(mesh.scale() as u32);
        let prop_stride = strides.stride(self.settings.density_index);
        let foliage_stride = strides.stride(self.settings.foliage_density_index);

        let mut props = self.scatter(mesh, ground, prop_stride, PlacementLayer::Prop, rng);
        let foliage = self.scatter(mesh, ground, foliage_stride, PlacementLayer::Foliage, rng);
        debug!(
            props = props.len(),
            foliage = foliage.len(),
            prop_stride,
            foliage_stride,
            "Scattered placements"
        );

        let overlay = PropOverlay::new(
            ground,
            props
                .iter()
                .filter(|p| p.kind.footprint_radius > 0.0)
                .map(PropPlacement::obstacle),
        );
        let spawn = self.find_spawn(mesh, &overlay);

        props.extend(foliage);
        PlacementOutcome {
            props,
            spawn,
            prop_stride,
            foliage_stride,
        }
    }

    fn scatter(
        &self,
        mesh: &MeshBuffers,
        ground: &impl GroundQuery,
        stride: usize,
        layer: PlacementLayer,
        rng: &mut impl Rng,
    ) -> Vec<PropPlacement> {
        let mut placed = Vec::new();
        let end = mesh.vertex_count().saturating_sub(1);
        let mut i = 0;

        while i < end {
            let vertex = i;
            i += stride;

            let elevation = mesh.elevation(vertex);
            if elevation <= 0.0 {
                continue;
            }
            let Some(hit) = ground.query(mesh.world_position(vertex)) else {
                continue;
            };
            let Some(band) = classify(self.bands, elevation) else {
                continue;
            };
            let kind = match layer {
                PlacementLayer::Prop => {
                    if band.props.is_empty() {
                        continue;
                    }
                    &band.props[rng.random_range(0..band.props.len())]
                }
                PlacementLayer::Foliage => self.settings.foliage.for_biome(self.biome),
            };

            let offset = Vec3::new(self.jitter.sample(rng), 0.0, self.jitter.sample(rng));
            let scale = self.pick_scale(kind, rng);
            let rotation_degrees = rng.random_range(0.0..360.0);

            placed.push(PropPlacement {
                kind: kind.clone(),
                position: hit.point + offset,
                rotation_degrees,
                scale,
                surface_normal: hit.normal,
                vertex_index: vertex,
                layer,
            });
        }

        placed
    }

    fn pick_scale(&self, kind: &PropKind, rng: &mut impl Rng) -> f32 {
        match kind.scale_rule {
            ScaleRule::Wide => rng.random_range(WIDE_SCALE_MIN..=WIDE_SCALE_MAX),
            ScaleRule::Perturb => {
                let variation = self.settings.scale_variation.abs();
                kind.authored_scale + rng.random_range(-variation..=variation)
            }
        }
    }

    /// First vertex, in index order, low enough to stand on and not covered
    /// by a prop.
    fn find_spawn(&self, mesh: &MeshBuffers, ground: &impl GroundQuery) -> Option<SpawnPoint> {
        let max_elevation = self.settings.spawn_max_elevation;
        let offset = Vec3::from_array(self.settings.spawn_offset);

        (0..mesh.vertex_count()).find_map(|vertex| {
            let elevation = mesh.elevation(vertex);
            if elevation <= 0.0 || elevation > max_elevation {
                return None;
            }
            let hit = ground.query(mesh.world_position(vertex))?;
            classify(self.bands, elevation)?;
            if hit.surface == SurfaceTag::Prop {
                return None;
            }
            Some(SpawnPoint {
                position: hit.point + offset,
                vertex_index: vertex,
            })
        })
    }
}
