//! RGBA canvas backing the debug map renderers.

use std::collections::HashSet;
use std::path::Path;

use ::image::{ImageFormat, Rgba, RgbaImage};

use crate::error::TerrainError;

/// One debug map, one pixel per field cell. New images are transparent black.
#[derive(Clone, Debug)]
pub struct DebugImage {
    canvas: RgbaImage,
}

impl DebugImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
        }
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.canvas.put_pixel(x, y, Rgba(rgba));
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.canvas.get_pixel(x, y).0
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.canvas.as_raw()
    }

    /// Distinct RGB colours present, alpha ignored.
    pub fn unique_color_count(&self) -> usize {
        self.canvas
            .pixels()
            .map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn save_png(&self, path: &Path) -> Result<(), TerrainError> {
        self.canvas.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_transparent() {
        let image = DebugImage::new(16, 8);
        assert_eq!(image.dimensions(), (16, 8));
        assert_eq!(image.as_raw().len(), 16 * 8 * 4);
        assert!(image.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixels_are_addressed_by_column_then_row() {
        let mut image = DebugImage::new(8, 8);
        image.set_pixel(2, 3, [10, 20, 30, 40]);
        assert_eq!(image.get_pixel(2, 3), [10, 20, 30, 40]);
        assert_eq!(image.get_pixel(3, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn test_unique_color_count_ignores_alpha() {
        let mut image = DebugImage::new(3, 1);
        image.set_pixel(0, 0, [255, 0, 0, 255]);
        image.set_pixel(1, 0, [255, 0, 0, 10]);
        image.set_pixel(2, 0, [0, 0, 255, 255]);
        assert_eq!(image.unique_color_count(), 2);
    }

    #[test]
    fn test_save_png_round_trips_through_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let mut image = DebugImage::new(4, 4);
        image.set_pixel(1, 1, [200, 100, 50, 255]);
        image.save_png(&path).unwrap();

        let decoded = ::image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(1, 1).0, [200, 100, 50, 255]);
    }

    #[test]
    fn test_save_png_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = DebugImage::new(2, 2).save_png(&dir.path().join("nope").join("map.png"));
        assert!(matches!(result, Err(TerrainError::Image(_))));
    }
}
