//! Grayscale reduction and resampling ahead of hashing.
//!
//! [`GrayImage::resample`] does both in a single pass: each destination
//! sample picks its nearest source pixel (truncating integer ratio, no
//! interpolation) and averages its R, G, B channels. The hash functions
//! call it twice per image, once at 9x8 and once at 8x8.
//!
//! ```
//! use png_phash::{GrayImage, Image};
//!
//! // 2x1: black, white
//! let image = Image::from_rgba(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
//! let gray = GrayImage::resample(&image, 4, 1);
//! assert_eq!(gray.samples(), &[0, 0, 255, 255]);
//! ```

mod gray;
mod resize;

pub use gray::{rgb_to_gray, GrayImage};
