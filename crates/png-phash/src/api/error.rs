//! Unified error type for the png-phash public API.

use thiserror::Error;

use crate::container::FormatError;
use crate::hash::HashError;
use crate::raster::DecodeError;

/// Any failure while turning a PNG into its fingerprints.
///
/// # Example
///
/// ```
/// use png_phash::{ImageHasher, PhashError};
///
/// let err = ImageHasher::new().hash_bytes(b"GIF89a").unwrap_err();
/// assert!(matches!(err, PhashError::Format(_)));
/// assert_eq!(err.kind(), "bad-signature");
/// ```
#[derive(Debug, Error)]
pub enum PhashError {
    #[error("invalid PNG container: {0}")]
    Format(#[from] FormatError),
    #[error("cannot decode pixel data: {0}")]
    Decode(#[from] DecodeError),
    #[error("cannot hash image: {0}")]
    Hash(#[from] HashError),
}

impl PhashError {
    /// Stable short name of the failure, suitable for logs and scripts.
    pub fn kind(&self) -> &'static str {
        match self {
            PhashError::Format(err) => match err {
                FormatError::BadSignature => "bad-signature",
                FormatError::BadHeader(_) => "bad-header",
                FormatError::UnsupportedColorType(_) => "unsupported-color-type",
                FormatError::UnsupportedBitDepth(_) => "unsupported-bit-depth",
                FormatError::Interlaced => "interlaced",
                FormatError::Overflow => "overflow",
                FormatError::ImageTooLarge { .. } => "image-too-large",
                FormatError::MissingImageData => "missing-image-data",
                FormatError::Truncated => "truncated",
                FormatError::Io(_) => "io",
            },
            PhashError::Decode(err) => match err {
                DecodeError::Inflate(_) => "inflate",
                DecodeError::BadFilter { .. } => "bad-filter",
                DecodeError::SizeMismatch { .. } => "size-mismatch",
                DecodeError::TrailingData { .. } => "trailing-data",
            },
            PhashError::Hash(HashError::Geometry { .. }) => "geometry",
        }
    }
}
