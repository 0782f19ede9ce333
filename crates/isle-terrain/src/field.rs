//! Dense 2D scalar grids used for height and falloff data.

/// A `width × height` grid of `f32` samples stored row-major (`y * width + x`).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

/// Normalized noise heights in `[0, 1]`.
pub type HeightField = Field;

/// Edge attenuation mask in `[0, 1]`, subtracted from a [`HeightField`].
pub type FalloffField = Field;

impl Field {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            values: vec![value; width * height],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when both dimensions are equal.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height, "field index ({x}, {y}) out of range");
        self.values[y * self.width + x]
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(x < self.width && y < self.height, "field index ({x}, {y}) out of range");
        self.values[y * self.width + x] = value;
    }

    /// Row-major view of every sample.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Smallest and largest sample, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

/// Position of `value` between `a` and `b`, clamped to `[0, 1]`.
///
/// Returns `0.5` when `a == b`, since every sample of a constant field is
/// equally far from both ends.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.5;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}
