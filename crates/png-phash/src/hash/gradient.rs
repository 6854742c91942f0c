//! Difference hash (dhash).

use super::{check_geometry, GradientHash, HashError};
use crate::preprocess::GrayImage;

pub const GRADIENT_WIDTH: u32 = 9;
pub const GRADIENT_HEIGHT: u32 = 8;

/// Gradient hash of a 9x8 grayscale grid.
///
/// For each row and each of its first 8 columns, the bit is set when the
/// sample is darker than its right neighbour. Bits are shifted in row by
/// row, left to right, so row 0 column 0 ends up in the most significant
/// bit.
///
/// ```
/// use png_phash::{gradient_hash, GrayImage};
///
/// let ramp: Vec<u8> = (0..8).flat_map(|_| 0..9u8).collect();
/// let gray = GrayImage::new(9, 8, ramp).unwrap();
/// assert_eq!(gradient_hash(&gray).unwrap().bits(), u64::MAX);
/// ```
pub fn gradient_hash(gray: &GrayImage) -> Result<GradientHash, HashError> {
    check_geometry(gray, GRADIENT_WIDTH, GRADIENT_HEIGHT)?;
    Ok(gradient_bits(gray))
}

pub(super) fn gradient_bits(gray: &GrayImage) -> GradientHash {
    let mut bits = 0u64;
    for y in 0..GRADIENT_HEIGHT {
        for pair in gray.row(y).windows(2) {
            bits = (bits << 1) | u64::from(pair[0] < pair[1]);
        }
    }
    GradientHash::from_bits(bits)
}
