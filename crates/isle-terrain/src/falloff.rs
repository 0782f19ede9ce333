//! Square island falloff masks.

use crate::curve::Curve;
use crate::field::FalloffField;

/// Build a falloff mask by evaluating `curve` at each cell's Chebyshev
/// distance from the center of the normalized square `[-1, 1]²`.
///
/// The horizontal coordinate is derived from the row index over `width` and
/// the vertical one from the column index over `height`. The axes only line
/// up when `width == height`; callers are expected to pass square maps.
pub fn generate_falloff(width: usize, height: usize, curve: &impl Curve) -> FalloffField {
    FalloffField::from_fn(width, height, |x, y| {
        let xv = y as f32 / width as f32 * 2.0 - 1.0;
        let yv = x as f32 / height as f32 * 2.0 - 1.0;
        curve.evaluate(xv.abs().max(yv.abs()))
    })
}
