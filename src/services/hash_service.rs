use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use png_phash::ImageHasher;

use crate::error::AppError;
use crate::models::{AppConfig, ComparisonReport, FileReport};

/// Hashes files from disk with one shared [`ImageHasher`]
#[derive(Debug, Clone)]
pub struct HashService {
    hasher: ImageHasher,
}

impl HashService {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        if config.max_pixels == 0 {
            return Err(AppError::Config(
                "max_pixels must be positive".to_string(),
            ));
        }
        Ok(Self {
            hasher: ImageHasher::new().limits(config.decode_limits()),
        })
    }

    /// Decode and fingerprint one PNG file
    pub fn hash_file(&self, path: &Path) -> Result<FileReport, AppError> {
        let file = File::open(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Hashing file");
        let hashes = self
            .hasher
            .hash_reader(BufReader::new(file))
            .map_err(|source| AppError::Hash {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            gradient = %hashes.gradient,
            mean = %hashes.mean,
            "Hashed file"
        );
        Ok(FileReport::new(path, hashes))
    }

    /// Hash every path in order, stopping at the first failure
    pub fn hash_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<FileReport>, AppError> {
        paths.iter().map(|p| self.hash_file(p.as_ref())).collect()
    }

    /// Hash two files and measure the distance between them
    pub fn compare(&self, first: &Path, second: &Path) -> Result<ComparisonReport, AppError> {
        let a = self.hash_file(first)?;
        let b = self.hash_file(second)?;
        let report = ComparisonReport::new(a, b);
        tracing::info!(
            gradient = report.distance.gradient,
            mean = report.distance.mean,
            "Compared files"
        );
        Ok(report)
    }
}
