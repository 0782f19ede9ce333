//! Multi-octave gradient-noise height field generation.
//!
//! Octaves of Perlin noise are summed per cell, then the whole field is
//! rescaled into `[0, 1]` with a min/max inverse-lerp pass. The rescale runs
//! after accumulation finishes, so every cell is measured against the extremes
//! of the entire field rather than the cells visited before it.

use noise::{NoiseFn, Perlin};
use rand::Rng;
use tracing::debug;

use crate::field::{HeightField, inverse_lerp};

/// Magnitude limit applied to non-zero seeds, and the range of the random
/// per-octave offsets drawn when the seed is zero.
pub const SEED_LIMIT: i32 = 100_000;

/// Permutation seed of the underlying gradient noise. Fixed so that the map
/// seed only acts through the sampling offsets.
const PERMUTATION_SEED: u32 = 0;

/// Scale substituted for a zero scale.
const MIN_SCALE: f32 = 0.1;

/// Parameters of one height field generation.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// `0` draws random per-octave offsets; any other value is clamped to
    /// `±SEED_LIMIT` and used as the offset of every octave on both axes.
    pub seed: i32,
    /// Zoom of the first octave. Larger values produce broader features.
    pub scale: f32,
    /// Number of layers summed per cell.
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f32,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: 0,
            scale: 25.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Height field generator over Perlin gradient noise.
pub struct NoiseField {
    noise: Perlin,
}

impl NoiseField {
    pub fn new() -> Self {
        Self {
            noise: Perlin::new(PERMUTATION_SEED),
        }
    }

    /// Gradient noise remapped from `[-1, 1]` to `[0, 1]`.
    fn sample01(&self, x: f64, y: f64) -> f64 {
        (self.noise.get([x, y]) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Generate a normalized height field.
    ///
    /// `rng` is only drawn from when `params.seed == 0`.
    pub fn generate(&self, params: &NoiseParams, rng: &mut impl Rng) -> HeightField {
        let offsets = octave_offsets(params.seed, params.octaves, rng);
        let scale = if params.scale == 0.0 {
            MIN_SCALE
        } else {
            params.scale
        } as f64;

        let mut min = f32::MAX;
        let mut max = f32::MIN;

        let mut field = HeightField::from_fn(params.width, params.height, |x, y| {
            let mut frequency = 1.0_f64;
            let mut amplitude = 1.0_f64;
            let mut total = 0.0_f64;

            for &(ox, oy) in &offsets {
                let sx = (x as f64 / scale) * frequency + ox * frequency;
                let sy = (y as f64 / scale) * frequency + oy * frequency;
                total += (self.sample01(sx, sy) * 2.0 - 1.0) * amplitude;

                amplitude *= params.persistence as f64;
                frequency *= params.lacunarity as f64;
            }

            let total = total as f32;
            if total > max {
                max = total;
            }
            if total < min {
                min = total;
            }
            total
        });

        for value in field.values_mut() {
            *value = inverse_lerp(min, max, *value);
        }

        debug!(
            width = params.width,
            height = params.height,
            octaves = params.octaves,
            raw_min = min,
            raw_max = max,
            "Generated noise field"
        );

        field
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-octave sampling offsets derived from `seed`.
///
/// A zero seed gives every octave its own random pair. Any other seed is
/// clamped to `±SEED_LIMIT` and repeated on both axes of every octave, so
/// non-zero seeds do not decorrelate octaves from each other.
pub fn octave_offsets(seed: i32, octaves: u32, rng: &mut impl Rng) -> Vec<(f64, f64)> {
    let limit = SEED_LIMIT as f64;
    (0..octaves)
        .map(|_| {
            if seed == 0 {
                (rng.random_range(-limit..limit), rng.random_range(-limit..limit))
            } else {
                let s = seed.clamp(-SEED_LIMIT, SEED_LIMIT) as f64;
                (s, s)
            }
        })
        .collect()
}
