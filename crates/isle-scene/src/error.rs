use thiserror::Error;

/// Map configurations the generation pipeline refuses to build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("map must have at least one cell, got {width}x{height}")]
    EmptyMap { width: usize, height: usize },

    #[error("map must be square, got {width}x{height}")]
    NonSquareMap { width: usize, height: usize },
}
