//! png-phash: perceptual fingerprints for PNG images
//!
//! This library decodes 8-bit RGBA PNG files with a small self-contained
//! container reader and derives two 64-bit perceptual hashes from them.
//! Visually similar images produce hashes that differ in few bits.
//!
//! # Quick Start
//!
//! The [`ImageHasher`] builder is the primary entry point:
//!
//! ```no_run
//! use png_phash::ImageHasher;
//!
//! let file = std::fs::File::open("photo.png")?;
//! let pair = ImageHasher::new().hash_reader(std::io::BufReader::new(file))?;
//! println!("{}", pair);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Comparing
//!
//! ```
//! use png_phash::{GradientHash, PerceptualHash};
//!
//! let a = GradientHash::from_bits(0xff00);
//! let b = GradientHash::from_bits(0x0f00);
//! assert_eq!(a.distance(&b), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! bytes ──> container::read_png ──> PngStream (IHDR + joined IDAT)
//!                                      │
//!                                      v
//!                               raster::decode ──> Image (RGBA8)
//!                                      │
//!               ┌──────────────────────┴──────────────────────┐
//!               v                                             v
//!   GrayImage::resample(9x8)                     GrayImage::resample(8x8)
//!               │                                             │
//!               v                                             v
//!        gradient_hash                                    mean_hash
//! ```
//!
//! # Supported input
//!
//! Only non-interlaced, 8-bit truecolor-with-alpha PNGs (color type 6) are
//! decoded. Chunk checksums are not verified and ancillary chunks are
//! skipped. Anything else is rejected with a [`FormatError`].
//!
//! # Error Handling
//!
//! Each stage has its own error type ([`FormatError`], [`DecodeError`],
//! [`HashError`]); [`PhashError`] wraps them all for `?` propagation.

pub mod api;
pub mod container;
pub mod hash;
pub mod preprocess;
pub mod raster;

#[cfg(test)]
mod testing;

pub use api::{ImageHasher, PhashError};
pub use container::{read_png, DecodeLimits, FormatError, ImageHeader, PngStream};
pub use hash::{
    gradient_hash, hamming, hash_image, mean_hash, GradientHash, HashDistance, HashError,
    HashPair, MeanHash, PerceptualHash,
};
pub use preprocess::GrayImage;
pub use raster::{decode, DecodeError, Image};
