//! Perceptual fingerprints and their comparison.
//!
//! Two independent 64-bit hashes are derived from every image:
//!
//! - [`GradientHash`] (dhash): horizontal brightness gradients over a 9x8
//!   grayscale reduction
//! - [`MeanHash`] (ahash): brightness relative to the mean over an 8x8
//!   grayscale reduction
//!
//! Similar images produce hashes with a small [`hamming`] distance. The two
//! kinds are distinct types, so only like can be compared with like.

mod distance;
mod error;
mod gradient;
mod mean;
mod value;

pub use distance::hamming;
pub use error::HashError;
pub use gradient::{gradient_hash, GRADIENT_HEIGHT, GRADIENT_WIDTH};
pub use mean::{mean_hash, MEAN_SIZE};
pub use value::{GradientHash, HashDistance, HashPair, MeanHash, PerceptualHash};

use crate::preprocess::GrayImage;
use crate::raster::Image;

fn check_geometry(gray: &GrayImage, width: u32, height: u32) -> Result<(), HashError> {
    if gray.width() == width && gray.height() == height {
        Ok(())
    } else {
        Err(HashError::Geometry {
            expected: (width, height),
            actual: (gray.width(), gray.height()),
        })
    }
}

/// Both fingerprints of a decoded image.
///
/// Resamples once to 9x8 for the gradient hash and once to 8x8 for the mean
/// hash; each grayscale grid is dropped as soon as its hash is taken.
pub fn hash_image(image: &Image) -> HashPair {
    let gradient = {
        let gray = GrayImage::resample(image, GRADIENT_WIDTH, GRADIENT_HEIGHT);
        gradient::gradient_bits(&gray)
    };
    let mean = {
        let gray = GrayImage::resample(image, MEAN_SIZE, MEAN_SIZE);
        mean::mean_bits(&gray)
    };
    tracing::debug!(%gradient, %mean, "Hashed image");
    HashPair { gradient, mean }
}
