//! ImageHasher builder: the main entry point for hashing PNG files.
//!
//! [`ImageHasher`] runs the whole pipeline (container parsing, inflate and
//! unfilter, grayscale resampling, both hashes) under one set of
//! [`DecodeLimits`].

use std::io::Read;

use super::PhashError;
use crate::container::{read_png, DecodeLimits};
use crate::hash::{hash_image, HashPair};
use crate::raster::{decode, Image};

/// Reusable PNG fingerprinting pipeline.
///
/// - Configuration methods consume and return `self`
/// - Hashing methods take `&self`, so one hasher serves any number of images
///
/// # Example
///
/// ```
/// use png_phash::{DecodeLimits, ImageHasher};
///
/// let hasher = ImageHasher::new().limits(DecodeLimits::new().max_pixels(4096));
/// assert_eq!(hasher.decode_limits().max_pixels, 4096);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageHasher {
    limits: DecodeLimits,
}

impl ImageHasher {
    /// Hasher with the default 64 megapixel budget.
    pub fn new() -> Self {
        Self {
            limits: DecodeLimits::default(),
        }
    }

    /// Replace the decode limits.
    #[inline]
    pub fn limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the largest `width * height` accepted.
    #[inline]
    pub fn max_pixels(mut self, max_pixels: u64) -> Self {
        self.limits = self.limits.max_pixels(max_pixels);
        self
    }

    #[inline]
    pub fn decode_limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Read and decode a PNG into RGBA8 pixels.
    pub fn decode<R: Read>(&self, src: R) -> Result<Image, PhashError> {
        let stream = read_png(src, &self.limits)?;
        Ok(decode(stream)?)
    }

    /// Decode a PNG from `src` and compute both fingerprints.
    pub fn hash_reader<R: Read>(&self, src: R) -> Result<HashPair, PhashError> {
        let image = self.decode(src)?;
        Ok(self.hash_image(&image))
    }

    /// [`hash_reader`](Self::hash_reader) over an in-memory PNG.
    pub fn hash_bytes(&self, bytes: &[u8]) -> Result<HashPair, PhashError> {
        self.hash_reader(bytes)
    }

    /// Fingerprints of an already decoded image.
    pub fn hash_image(&self, image: &Image) -> HashPair {
        hash_image(image)
    }
}
