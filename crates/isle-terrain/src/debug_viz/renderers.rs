//! Renderers for the noise, falloff and band colour maps.

use super::image::DebugImage;
use crate::band::{TerrainBand, classify};
use crate::field::{FalloffField, Field, HeightField};

fn grey(value: f32) -> [u8; 4] {
    let v = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    [v, v, v, 255]
}

fn render_greyscale(field: &Field) -> DebugImage {
    let mut image = DebugImage::new(field.width() as u32, field.height() as u32);
    for y in 0..field.height() {
        for x in 0..field.width() {
            image.set_pixel(x as u32, y as u32, grey(field.get(x, y)));
        }
    }
    image
}

/// Black-to-white rendering of a height field.
pub fn render_noise_map(heights: &HeightField) -> DebugImage {
    render_greyscale(heights)
}

/// Black-to-white rendering of a falloff mask.
pub fn render_falloff_map(falloff: &FalloffField) -> DebugImage {
    render_greyscale(falloff)
}

/// Colours each cell with the band covering `clamp01(height - falloff)`.
///
/// Cells that no band covers stay transparent black.
///
/// # Panics
///
/// Panics if the two fields have different dimensions.
pub fn render_colour_map(
    heights: &HeightField,
    falloff: &FalloffField,
    bands: &[TerrainBand],
) -> DebugImage {
    assert_eq!(
        (heights.width(), heights.height()),
        (falloff.width(), falloff.height()),
        "height and falloff fields must share dimensions"
    );

    let mut image = DebugImage::new(heights.width() as u32, heights.height() as u32);
    for y in 0..heights.height() {
        for x in 0..heights.width() {
            let value = (heights.get(x, y) - falloff.get(x, y)).clamp(0.0, 1.0);
            if let Some(band) = classify(bands, value) {
                let [r, g, b] = band.color;
                image.set_pixel(x as u32, y as u32, [r, g, b, 255]);
            }
        }
    }
    image
}
