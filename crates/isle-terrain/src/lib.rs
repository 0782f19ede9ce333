//! Procedural island terrain: multi-octave noise height fields, falloff masks,
//! terrain bands, and the density/jitter helpers used by prop placement.

mod band;
mod curve;
mod divisors;
mod error;
mod falloff;
mod field;
mod halton;
mod noise_field;
mod seed;

pub mod debug_viz;

pub use band::{Biome, PropKind, ScaleRule, TerrainBand, classify, default_bands};
pub use curve::{Curve, CurveShape, Keyframe};
pub use divisors::{DivisorStride, divisors};
pub use error::TerrainError;
pub use falloff::generate_falloff;
pub use field::{FalloffField, Field, HeightField, inverse_lerp};
pub use halton::{JitterSequence, radical_inverse};
pub use noise_field::{NoiseField, NoiseParams, SEED_LIMIT, octave_offsets};
pub use seed::{entropy_rng, seeded_rng};
