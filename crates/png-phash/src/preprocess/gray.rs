//! 8-bit grayscale sample grid.

/// Single-channel 8-bit image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) samples: Vec<u8>,
}

impl GrayImage {
    /// Wrap a sample buffer. Returns `None` when `samples.len()` is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        if samples.len() != (width as usize).checked_mul(height as usize)? {
            return None;
        }
        Some(Self {
            width,
            height,
            samples,
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
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "sample out of bounds");
        self.samples[y as usize * self.width as usize + x as usize]
    }

    /// One row of samples.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.samples[start..start + w]
    }
}

/// Unweighted channel average, truncated: `(r + g + b) / 3`.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}
