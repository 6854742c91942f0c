//! Average hash (ahash).

use super::{check_geometry, HashError, MeanHash};
use crate::preprocess::GrayImage;

pub const MEAN_SIZE: u32 = 8;

/// Mean hash of an 8x8 grayscale grid.
///
/// The mean is the truncated average of all 64 samples; a bit is set when
/// its sample is strictly below the mean. Bit order matches
/// [`gradient_hash`](super::gradient_hash).
pub fn mean_hash(gray: &GrayImage) -> Result<MeanHash, HashError> {
    check_geometry(gray, MEAN_SIZE, MEAN_SIZE)?;
    Ok(mean_bits(gray))
}

pub(super) fn mean_bits(gray: &GrayImage) -> MeanHash {
    let samples = gray.samples();
    let sum: u32 = samples.iter().map(|&s| u32::from(s)).sum();
    let mean = sum / samples.len() as u32;

    let bits = samples
        .iter()
        .fold(0u64, |bits, &s| (bits << 1) | u64::from(u32::from(s) < mean));
    MeanHash::from_bits(bits)
}
