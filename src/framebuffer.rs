//! Core framebuffer for pixel rendering.
//!
//! A tightly packed, row-major RGBA pixel grid. This is the canvas the
//! rasterizers draw into and the encoder serializes.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Bytes per RGBA pixel.
const BYTES_PER_PIXEL: usize = 4;

/// RGBA framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, `width * 4` bytes per row.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with [`Rgba::TRANSPARENT`].
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(200, 200).unwrap();
    /// assert_eq!(fb.width(), 200);
    /// assert_eq!(fb.pixel_count(), 40_000);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw, tightly packed RGBA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = self.row_bytes();
        let start = (y as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    /// Count the pixels that exactly match `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|chunk| *chunk == rgba)
            .count()
    }

    /// Coordinates of every pixel that is not fully transparent, row by row.
    pub fn lit_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| {
            self.row(y).into_iter().flat_map(move |row| {
                row.chunks_exact(BYTES_PER_PIXEL)
                    .zip(0..)
                    .filter(|(pixel, _)| pixel[3] != 0)
                    .map(move |(_, x)| Point::new(x, y as i32))
            })
        })
    }

    #[inline]
    const fn row_bytes(&self) -> usize {
        (self.width as usize) * BYTES_PER_PIXEL
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    const fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.row_bytes() + (x as usize) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 5000 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_starts_transparent() {
        let fb = Framebuffer::new(8, 8).unwrap();
        assert_eq!(fb.count_pixels(Rgba::TRANSPARENT), 64);
        assert_eq!(fb.lit_points().count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::WHITE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(5, 4), Some(Rgba::TRANSPARENT));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
        fb.set_pixel(10, 0, Rgba::WHITE);
        assert_eq!(fb.count_pixels(Rgba::WHITE), 1);
    }

    #[test]
    fn test_set_pixel_is_idempotent() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(1, 2, Rgba::WHITE);
        let once = fb.clone();
        fb.set_pixel(1, 2, Rgba::WHITE);
        assert_eq!(fb, once);
    }

    #[test]
    fn test_row_access() {
        let mut fb = Framebuffer::new(10, 5).unwrap();
        fb.set_pixel(3, 2, Rgba::RED);

        let row = fb.row(2).unwrap();
        assert_eq!(row.len(), 40);
        assert_eq!(&row[12..16], &[255, 0, 0, 255]);
        assert!(fb.row(5).is_none());
    }

    #[test]
    fn test_lit_points_row_major() {
        let mut fb = Framebuffer::new(6, 4).unwrap();
        fb.set_pixel(5, 0, Rgba::WHITE);
        fb.set_pixel(0, 3, Rgba::WHITE);
        fb.set_pixel(2, 1, Rgba::BLACK);

        let points: Vec<Point> = fb.lit_points().collect();
        assert_eq!(
            points,
            vec![Point::new(5, 0), Point::new(2, 1), Point::new(0, 3)]
        );
    }
}
