//! Fingerprint newtypes.

use std::fmt;

use super::distance::hamming;

/// A 64-bit perceptual fingerprint of one kind.
///
/// Each hash kind is its own type so that comparing a gradient hash with a
/// mean hash does not compile.
pub trait PerceptualHash: Copy + Eq {
    /// Short name of the hash kind.
    const NAME: &'static str;

    /// The raw 64 bits, first extracted bit in the most significant position.
    fn bits(&self) -> u64;

    /// Hamming distance to another fingerprint of the same kind.
    #[inline]
    fn distance(&self, other: &Self) -> u32 {
        hamming(self.bits(), other.bits())
    }
}

macro_rules! hash_newtype {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(u64);

        impl $name {
            #[inline]
            pub const fn from_bits(bits: u64) -> Self {
                Self(bits)
            }

            #[inline]
            pub const fn bits(self) -> u64 {
                self.0
            }
        }

        impl PerceptualHash for $name {
            const NAME: &'static str = $kind;

            #[inline]
            fn bits(&self) -> u64 {
                self.0
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(hash: $name) -> u64 {
                hash.0
            }
        }

        /// `0x` followed by 16 lowercase hex digits.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{:016x}", self.0)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl fmt::UpperHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::UpperHex::fmt(&self.0, f)
            }
        }
    };
}

hash_newtype!(
    /// Difference hash over a 9x8 grayscale grid.
    GradientHash,
    "gradient"
);

hash_newtype!(
    /// Average hash over an 8x8 grayscale grid.
    MeanHash,
    "mean"
);

/// Both fingerprints of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashPair {
    pub gradient: GradientHash,
    pub mean: MeanHash,
}

impl HashPair {
    /// Per-kind Hamming distances to `other`.
    pub fn distance(&self, other: &HashPair) -> HashDistance {
        HashDistance {
            gradient: self.gradient.distance(&other.gradient),
            mean: self.mean.distance(&other.mean),
        }
    }
}

/// Renders as `<gradient> <mean>`.
impl fmt::Display for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gradient, self.mean)
    }
}

/// Hamming distances between two [`HashPair`]s, each in `0..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HashDistance {
    pub gradient: u32,
    pub mean: u32,
}
