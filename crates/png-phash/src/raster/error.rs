//! Error type for pixel data decoding.

use thiserror::Error;

/// Failure while inflating or unfiltering the IDAT stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The zlib stream is corrupt.
    #[error("inflate failed: {0}")]
    Inflate(String),

    /// A scanline starts with a filter type outside 0..=4.
    #[error("unknown filter type {filter} on scanline {row}")]
    BadFilter { row: u32, filter: u8 },

    /// The stream inflated to fewer bytes than the header implies.
    #[error("decompressed size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The stream inflates past the last scanline.
    #[error("decompressed data exceeds the expected {expected} bytes")]
    TrailingData { expected: usize },
}
