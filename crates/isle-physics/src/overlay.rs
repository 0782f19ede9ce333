//! Prop footprints layered over another ground query.

use glam::{Vec3, Vec3Swizzles};

use crate::ground::{GroundHit, GroundQuery, SurfaceTag};

/// Vertical cylinder occupied by a placed prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Base of the prop in world space.
    pub center: Vec3,
    /// Horizontal radius of the footprint.
    pub radius: f32,
}

impl Obstacle {
    pub fn covers(&self, point: Vec3) -> bool {
        self.center.xz().distance_squared(point.xz()) <= self.radius * self.radius
    }
}

/// Reports hits that land inside any obstacle footprint as [`SurfaceTag::Prop`].
///
/// The wrapped query is never mutated; the overlay only re-tags its answers.
pub struct PropOverlay<'a, G: ?Sized> {
    ground: &'a G,
    obstacles: Vec<Obstacle>,
}

impl<'a, G: GroundQuery + ?Sized> PropOverlay<'a, G> {
    pub fn new(ground: &'a G, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        Self {
            ground,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}

impl<G: GroundQuery + ?Sized> GroundQuery for PropOverlay<'_, G> {
    fn query(&self, origin: Vec3) -> Option<GroundHit> {
        let mut hit = self.ground.query(origin)?;
        if self.obstacles.iter().any(|o| o.covers(hit.point)) {
            hit.surface = SurfaceTag::Prop;
        }
        Some(hit)
    }
}
