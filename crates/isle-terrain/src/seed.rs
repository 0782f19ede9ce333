//! Random sources threaded through generation.
//!
//! Every random draw in the pipeline goes through an explicit RNG argument;
//! these helpers build the two kinds callers usually want.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG: the same seed yields the same sequence on every platform.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// RNG seeded from the operating system, for intentionally varied runs.
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_os_rng()
}
