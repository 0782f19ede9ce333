//! Interleaved vertex format for terrain mesh upload.
//!
//! | Offset | Size | Field    |
//! |--------|------|----------|
//! | 0      | 12   | position |
//! | 12     | 12   | normal   |
//! | 24     | 8    | uv       |
//! | 32     | 4    | color    |

use std::mem;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One interleaved terrain vertex, 36 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// RGBA, alpha always 255.
    pub color: [u8; 4],
}

impl TerrainVertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2, color: [u8; 3]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
            color: [color[0], color[1], color[2], 255],
        }
    }

    /// Reinterpret a vertex slice as bytes for upload.
    pub fn slice_as_bytes(vertices: &[TerrainVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

const _: () = assert!(
    mem::size_of::<TerrainVertex>() == 36,
    "TerrainVertex size changed, update the layout table"
);
