//! Density control through the divisors of the mesh scale.

/// All positive divisors of `n` in ascending order, including `1` and `n`.
///
/// Returns an empty list for `n == 0`.
pub fn divisors(n: u32) -> Vec<u32> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1_u32;
    while (i as u64) * (i as u64) <= n as u64 {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Maps a density index to a traversal stride over mesh vertices.
///
/// Index `0` selects the smallest divisor (every vertex); higher indices
/// select larger divisors and therefore sparser placement. Indices past the
/// end clamp to the scale itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisorStride {
    divisors: Vec<u32>,
}

impl DivisorStride {
    pub fn new(scale: u32) -> Self {
        Self {
            divisors: divisors(scale),
        }
    }

    /// Stride for `density_index`, clamped to the last divisor.
    /// A scale of zero has no divisors and yields a stride of `1`.
    pub fn stride(&self, density_index: usize) -> usize {
        let last = self.divisors.len().saturating_sub(1);
        self.divisors
            .get(density_index.min(last))
            .map_or(1, |&d| d as usize)
    }

    pub fn divisors(&self) -> &[u32] {
        &self.divisors
    }
}
