//! Downward ray queries against a registered terrain mesh.

use glam::Vec3;
use isle_mesh::MeshBuffers;
use tracing::debug;

use crate::ground::{GroundHit, GroundQuery, SurfaceTag};

/// Barycentric slack so rays through shared edges and vertices still hit.
const BARYCENTRIC_EPSILON: f32 = 1e-4;

/// Intersect a ray with triangle `(a, b, c)` (Möller–Trumbore, double sided).
///
/// Returns the ray parameter `t` of the hit; negative values lie behind the
/// origin. Rays parallel to the triangle plane never hit.
pub fn ray_triangle(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() <= f32::EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = origin - a;
    let u = s.dot(p) * inv_det;
    if !(-BARYCENTRIC_EPSILON..=1.0 + BARYCENTRIC_EPSILON).contains(&u) {
        return None;
    }

    let q = s.cross(e1);
    let v = dir.dot(q) * inv_det;
    if v < -BARYCENTRIC_EPSILON || u + v > 1.0 + BARYCENTRIC_EPSILON {
        return None;
    }

    Some(e2.dot(q) * inv_det)
}

/// Collision copy of a terrain mesh at its registered world scale.
///
/// Queries only test the two triangles of the grid cell under the origin,
/// so each lookup is constant time.
#[derive(Clone, Debug)]
pub struct MeshCollider {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    width: usize,
    height: usize,
    scale: f32,
}

impl MeshCollider {
    /// Register `mesh` as collidable, scaled by [`MeshBuffers::scale`].
    pub fn from_mesh(mesh: &MeshBuffers) -> Self {
        let scale = mesh.scale();
        debug!(
            triangles = mesh.triangle_count(),
            scale, "Registered terrain collider"
        );
        Self {
            positions: mesh.positions.iter().map(|&p| p * scale).collect(),
            indices: mesh.indices.clone(),
            width: mesh.width(),
            height: mesh.height(),
            scale,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// How far above the origin a surface may sit and still count as a hit.
    /// Rays cast from a vertex start exactly on the surface.
    fn start_tolerance(&self) -> f32 {
        1e-3 * self.scale.max(1.0)
    }

    fn cell_under(&self, origin: Vec3) -> Option<usize> {
        if self.width == 0 || self.height == 0 || self.scale <= 0.0 {
            return None;
        }
        let lx = origin.x / self.scale;
        let lz = origin.z / self.scale;
        if !(0.0..=self.width as f32).contains(&lx) || !(0.0..=self.height as f32).contains(&lz) {
            return None;
        }
        let cx = (lx.floor() as usize).min(self.width - 1);
        let cz = (lz.floor() as usize).min(self.height - 1);
        Some(cz * self.width + cx)
    }
}

impl GroundQuery for MeshCollider {
    fn query(&self, origin: Vec3) -> Option<GroundHit> {
        let cell = self.cell_under(origin)?;
        let tolerance = self.start_tolerance();

        let mut best: Option<(f32, Vec3)> = None;
        for tri in self.indices[cell * 6..cell * 6 + 6].chunks_exact(3) {
            let [a, b, c] = [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ];
            let Some(t) = ray_triangle(origin, Vec3::NEG_Y, a, b, c) else {
                continue;
            };
            if t < -tolerance || best.is_some_and(|(best_t, _)| best_t <= t) {
                continue;
            }
            let mut normal = (b - a).cross(c - a).normalize_or(Vec3::Y);
            if normal.y < 0.0 {
                normal = -normal;
            }
            best = Some((t, normal));
        }

        best.map(|(t, normal)| GroundHit {
            point: origin + Vec3::NEG_Y * t,
            normal,
            surface: SurfaceTag::Terrain,
        })
    }
}
