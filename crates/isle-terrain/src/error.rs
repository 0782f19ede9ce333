//! Terrain crate error types.

/// Errors raised outside the numeric core, which clamps instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// Failed to encode or write a debug map.
    #[error("failed to save debug map: {0}")]
    Image(#[from] image::ImageError),
}
