//! Pixel buffer and color types.
//!
//! A [`PixelBuffer`] is an immutable RGB grid. Filters never write into the
//! buffer they read from; every operation produces a fresh buffer with the
//! same dimensions as its source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for pixel buffer construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide intermediate values, clamping each channel to 0-255.
    #[inline]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Apply the same channel transform to red, green and blue.
    #[inline]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// An RGB image with fixed, non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from dimensions and RGB pixel data.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or if `pixels` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }

        let expected = (width as usize) * (height as usize) * 3;
        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, BufferError> {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Create a buffer by evaluating `f` for every coordinate.
    ///
    /// Coordinates are visited in row-major order, which keeps stateful
    /// callers (seeded noise) reproducible.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Color,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }

        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y).channels());
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer with this buffer's dimensions and new pixel data.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Pixel buffer size mismatch");
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, BufferError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbImage` for resizing or encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.get(x, y).channels())
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Raw RGB bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// Color at a signed coordinate, or `None` if it lies outside the buffer.
    ///
    /// Neighborhood kernels use this to skip out-of-range samples.
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.get(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Whether a signed coordinate lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buf = PixelBuffer::new(4, 2, vec![0u8; 4 * 2 * 3]).unwrap();
        assert_eq!(buf.dimensions(), (4, 2));
        assert_eq!(buf.pixel_count(), 8);
        assert_eq!(buf.as_bytes().len(), 24);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            PixelBuffer::new(0, 5, vec![]),
            Err(BufferError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(PixelBuffer::filled(3, 0, Color::BLACK).is_err());
    }

    #[test]
    fn test_pixel_data_length_checked() {
        let err = PixelBuffer::new(2, 2, vec![0u8; 11]).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidPixelData {
                expected: 12,
                actual: 11
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 12 bytes (width * height * 3), got 11"
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let pixels = vec![
            1, 2, 3, 4, 5, 6, // row 0
            7, 8, 9, 10, 11, 12, // row 1
        ];
        let buf = PixelBuffer::new(2, 2, pixels).unwrap();
        assert_eq!(buf.get(1, 0), Color::new(4, 5, 6));
        assert_eq!(buf.get(0, 1), Color::new(7, 8, 9));
    }

    #[test]
    fn test_from_fn_matches_get() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| Color::new(x as u8, y as u8, 7)).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buf.get(x, y), Color::new(x as u8, y as u8, 7));
            }
        }
    }

    #[test]
    fn test_sample_out_of_range() {
        let buf = PixelBuffer::filled(2, 2, Color::WHITE).unwrap();
        assert_eq!(buf.sample(-1, 0), None);
        assert_eq!(buf.sample(0, 2), None);
        assert_eq!(buf.sample(1, 1), Some(Color::WHITE));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let buf = PixelBuffer::filled(2, 2, Color::WHITE).unwrap();
        buf.get(2, 0);
    }

    #[test]
    fn test_clamped_color() {
        assert_eq!(Color::from_clamped(-5, 128, 300), Color::new(0, 128, 255));
    }

    #[test]
    fn test_rgb_image_conversion() {
        let buf = PixelBuffer::from_fn(5, 3, |x, y| Color::new(x as u8 * 10, y as u8 * 20, 99)).unwrap();
        let img = buf.to_rgb_image();
        assert_eq!(img.dimensions(), (5, 3));
        let back = PixelBuffer::from_rgb_image(img).unwrap();
        assert_eq!(back, buf);
    }
}
