use std::path::PathBuf;

use png_phash::PhashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read {} [read]: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot hash {} [{}]: {source}", path.display(), source.kind())]
    Hash {
        path: PathBuf,
        #[source]
        source: PhashError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Short machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Read { .. } => "read",
            AppError::Hash { source, .. } => source.kind(),
            AppError::Config(_) => "config",
        }
    }
}
