//! Decoded RGBA8 image.

use crate::container::{BYTES_PER_PIXEL, COLOR_TYPE_RGBA};

/// A decoded truecolor-with-alpha image.
///
/// Pixels are stored row-major, four bytes per pixel in `R, G, B, A`
/// order. Only color type 6 is representable; the decoder rejects
/// everything else before an `Image` exists.
///
/// # Example
///
/// ```
/// use png_phash::Image;
///
/// let image = Image::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(image.pixel(1, 0), [0, 0, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap an RGBA8 buffer. Returns `None` for a zero dimension or when
    /// `pixels.len()` is not `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(BYTES_PER_PIXEL)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Construct from decoder output.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height * 4`.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "pixel buffer length must match {}x{} RGBA",
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always 6 (truecolor with alpha).
    #[inline]
    pub fn color_type(&self) -> u8 {
        COLOR_TYPE_RGBA
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let off = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [
            self.pixels[off],
            self.pixels[off + 1],
            self.pixels[off + 2],
            self.pixels[off + 3],
        ]
    }

    /// Consume the image, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Image::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(Image::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(Image::from_rgba(0, 5, vec![]).is_none());
    }

    #[test]
    fn test_pixel_lookup() {
        let pixels: Vec<u8> = (0..24).collect();
        let image = Image::from_rgba(3, 2, pixels).unwrap();
        assert_eq!(image.pixel(0, 0), [0, 1, 2, 3]);
        assert_eq!(image.pixel(2, 0), [8, 9, 10, 11]);
        assert_eq!(image.pixel(0, 1), [12, 13, 14, 15]);
        assert_eq!(image.color_type(), 6);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_pixel_out_of_bounds() {
        let image = Image::from_rgba(1, 1, vec![0; 4]).unwrap();
        let _ = image.pixel(1, 0);
    }
}
