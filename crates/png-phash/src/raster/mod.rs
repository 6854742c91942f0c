//! Pixel data decoding.
//!
//! Turns the zlib stream reassembled by [`container`](crate::container) into
//! an RGBA8 [`Image`]:
//!
//! 1. **Inflate** the whole stream in one shot into a buffer of
//!    `height * (1 + width * 4)` bytes
//! 2. **Unfilter** every scanline in order (None, Sub, Up, Average, Paeth)
//! 3. **Compact** the reconstructed rows over the filter bytes
//!
//! An unknown filter type is an error, never treated as None.

mod decoder;
mod error;
mod filter;
mod image;

pub use decoder::decode;
pub use error::DecodeError;
pub use filter::{paeth, unfilter_row, FilterType};
pub use image::Image;
