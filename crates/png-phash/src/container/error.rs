//! Error type for PNG container parsing.

use thiserror::Error;

/// Malformed or unsupported PNG container.
///
/// Raised by [`read_png`](super::read_png) before any pixel data is
/// decompressed. Every variant aborts processing of the current image.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The first eight bytes are not the PNG signature.
    #[error("not a PNG file (bad signature)")]
    BadSignature,

    /// The first chunk is not a well-formed 13-byte IHDR.
    #[error("invalid IHDR chunk: {0}")]
    BadHeader(&'static str),

    /// Only color type 6 (truecolor with alpha) is decoded.
    #[error("unsupported color type {0} (only RGBA, type 6, is supported)")]
    UnsupportedColorType(u8),

    /// Only 8 bits per channel is decoded.
    #[error("unsupported bit depth {0} (only 8-bit channels are supported)")]
    UnsupportedBitDepth(u8),

    /// Adam7 interlaced images are not decoded.
    #[error("interlaced PNG images are not supported")]
    Interlaced,

    /// A chunk length or an accumulated size does not fit.
    #[error("chunk length overflow")]
    Overflow,

    /// The image exceeds the configured pixel budget.
    #[error("image too large: {width}x{height} exceeds {max_pixels} pixels")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    /// IEND was reached without any IDAT payload.
    #[error("no image data (IDAT) before IEND")]
    MissingImageData,

    /// The byte source ended early, including before IEND.
    #[error("truncated PNG stream")]
    Truncated,

    /// The byte source failed for a reason other than end of stream.
    #[error("read error: {0}")]
    Io(#[source] std::io::Error),
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            FormatError::Truncated
        } else {
            FormatError::Io(err)
        }
    }
}
