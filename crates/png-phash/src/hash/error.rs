//! Error type for hash extraction.

use thiserror::Error;

/// The grayscale input does not have the geometry a hash requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error(
        "expected a {}x{} grayscale image, got {}x{}",
        expected.0,
        expected.1,
        actual.0,
        actual.1
    )]
    Geometry {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}
