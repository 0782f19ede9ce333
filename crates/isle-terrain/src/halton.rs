//! Halton-style low-discrepancy jitter.

use rand::Rng;

/// Radical inverse of `index` in base `radix`: the digits of `index` mirrored
/// around the radix point. Bases below 2 yield `0.0`.
pub fn radical_inverse(mut index: u32, radix: u32) -> f32 {
    if radix < 2 {
        return 0.0;
    }
    let inv = 1.0 / radix as f64;
    let mut fraction = inv;
    let mut result = 0.0_f64;
    while index > 0 {
        result += (index % radix) as f64 * fraction;
        index /= radix;
        fraction *= inv;
    }
    result as f32
}

/// Jitter offsets shared by every placement of one mesh build.
#[derive(Clone, Debug, PartialEq)]
pub struct JitterSequence {
    points: Vec<f32>,
}

impl JitterSequence {
    /// One point per row of the map, using the row count as the radix.
    pub fn for_field_height(field_height: usize) -> Self {
        let radix = field_height as u32;
        Self {
            points: (0..radix).map(|i| radical_inverse(i, radix)).collect(),
        }
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pick a point at a uniformly random index; `0.0` when empty.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points[rng.random_range(0..self.points.len())]
    }
}
