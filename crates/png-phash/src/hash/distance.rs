//! Hamming distance between fingerprints.

/// Number of differing bits between `a` and `b` (0 to 64).
///
/// Smaller is more similar; 0 means identical fingerprints.
///
/// ```
/// use png_phash::hamming;
///
/// assert_eq!(hamming(0b1011, 0b0110), 3);
/// assert_eq!(hamming(u64::MAX, 0), 64);
/// ```
#[inline]
pub fn hamming(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}
