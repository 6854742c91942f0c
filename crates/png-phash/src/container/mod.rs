//! PNG container parsing.
//!
//! Reads the signature, validates IHDR, and reassembles every IDAT payload
//! into one zlib stream. Pixel data is not touched here; see
//! [`raster`](crate::raster) for decompression and unfiltering.
//!
//! Only 8-bit truecolor with alpha (color type 6), non-interlaced, is
//! accepted. Ancillary chunks (gamma, ICC, text) are skipped and CRCs are
//! never verified.

mod chunk;
mod error;
mod reader;

pub use chunk::{ChunkHeader, ChunkType, MAX_CHUNK_LEN, PNG_SIGNATURE};
pub use error::FormatError;
pub use reader::{read_png, DecodeLimits, ImageHeader, PngStream, BYTES_PER_PIXEL, COLOR_TYPE_RGBA};
