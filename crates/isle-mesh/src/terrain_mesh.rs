//! Grid-to-triangle terrain meshing.
//!
//! A `width × height` field produces a `(width + 1) × (height + 1)` vertex grid.
//! Interior vertices sample their own cell; the extra column repeats the last
//! cell of its row and the extra row repeats the last interior cell of the
//! map, so the border never samples out of range.

use glam::{Vec2, Vec3};
use isle_terrain::{Curve, FalloffField, HeightField, TerrainBand, classify};
use tracing::debug;

use crate::bounds::Aabb;
use crate::normals::recalculate_normals;
use crate::vertex_format::TerrainVertex;

/// Vertex, UV, normal, colour and triangle buffers of a terrain mesh.
///
/// Positions are in grid units (`x`, `z` are vertex coordinates, `y` is the
/// elevation). The visual and collision meshes are registered at a uniform
/// scale of [`MeshBuffers::scale`].
#[derive(Clone, Debug)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    /// RGB colour of the band covering each vertex; black where none does.
    pub colors: Vec<[u8; 3]>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
    /// Bounds of `positions`, before scaling.
    pub bounds: Aabb,
    width: usize,
    height: usize,
    scale: f32,
}

impl MeshBuffers {
    /// Number of grid cells along x.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of grid cells along z.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Uniform scale of the registered mesh; equal to the field width.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Elevation of vertex `index`, before scaling.
    pub fn elevation(&self, index: usize) -> f32 {
        self.positions[index].y
    }

    /// Vertex `index` in world space.
    pub fn world_position(&self, index: usize) -> Vec3 {
        self.positions[index] * self.scale
    }

    /// Bounds of the registered mesh in world space.
    pub fn world_bounds(&self) -> Aabb {
        self.bounds.scaled(self.scale)
    }

    /// Interleaved vertices ready for GPU upload.
    pub fn packed_vertices(&self) -> Vec<TerrainVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .zip(&self.colors)
            .map(|(((p, n), uv), c)| TerrainVertex::new(*p, *n, *uv, *c))
            .collect()
    }
}

/// Triangle indices for a `width × height` cell grid.
///
/// For a cell whose top-left vertex is `v`, emits `(v, v+w+1, v+1)` and
/// `(v+1, v+w+1, v+w+2)`. With `x` to the right and `z` forward this winding
/// produces upward-facing normals.
pub fn grid_indices(width: usize, height: usize) -> Vec<u32> {
    let w = width as u32;
    let mut indices = Vec::with_capacity(width * height * 6);
    let mut v = 0_u32;
    for _ in 0..height {
        for _ in 0..width {
            indices.extend_from_slice(&[v, v + w + 1, v + 1, v + 1, v + w + 1, v + w + 2]);
            v += 1;
        }
        // Skip the extra border vertex at the end of each row.
        v += 1;
    }
    indices
}

/// The field cell a vertex at `(x, z)` takes its elevation from.
fn source_cell(x: usize, z: usize, width: usize, height: usize) -> (usize, usize) {
    if z >= height {
        (width - 1, height - 1)
    } else {
        (x.min(width - 1), z)
    }
}

/// Build the terrain mesh.
///
/// Each vertex elevation is `clamp01(height_curve(height) - falloff) *
/// height_multiplier`, sampled from the cell chosen by the border rule
/// above. UVs span `[0, 1]` across the grid. Vertex colours come from the
/// first band covering the unscaled surface value.
///
/// # Panics
///
/// Panics if `heights` and `falloff` have different dimensions.
pub fn build_terrain_mesh(
    heights: &HeightField,
    falloff: &FalloffField,
    height_multiplier: f32,
    height_curve: &impl Curve,
    bands: &[TerrainBand],
) -> MeshBuffers {
    let width = heights.width();
    let height = heights.height();
    assert_eq!(
        (width, height),
        (falloff.width(), falloff.height()),
        "height and falloff fields must share dimensions"
    );

    let vertex_count = (width + 1) * (height + 1);
    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);

    for z in 0..=height {
        for x in 0..=width {
            let surface = if width == 0 || height == 0 {
                0.0
            } else {
                let (sx, sz) = source_cell(x, z, width, height);
                (height_curve.evaluate(heights.get(sx, sz)) - falloff.get(sx, sz)).clamp(0.0, 1.0)
            };

            positions.push(Vec3::new(x as f32, surface * height_multiplier, z as f32));
            uvs.push(Vec2::new(x as f32 / width as f32, z as f32 / height as f32));
            colors.push(classify(bands, surface).map_or([0, 0, 0], |band| band.color));
        }
    }

    let indices = grid_indices(width, height);
    let normals = recalculate_normals(&positions, &indices);
    let bounds = Aabb::from_points(&positions).unwrap_or(Aabb::new(Vec3::ZERO, Vec3::ZERO));

    debug!(
        width,
        height,
        vertices = positions.len(),
        triangles = indices.len() / 3,
        max_elevation = bounds.max.y,
        "Built terrain mesh"
    );

    MeshBuffers {
        positions,
        uvs,
        normals,
        colors,
        indices,
        bounds,
        width,
        height,
        scale: width as f32,
    }
}
