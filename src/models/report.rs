use serde::Serialize;
use std::path::{Path, PathBuf};

use png_phash::{HashDistance, HashPair};

/// Fingerprints of one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// `0x`-prefixed, 16 hex digits
    pub gradient: String,
    /// `0x`-prefixed, 16 hex digits
    pub mean: String,
    #[serde(skip)]
    pub hashes: HashPair,
}

impl FileReport {
    pub fn new(path: &Path, hashes: HashPair) -> Self {
        Self {
            path: path.to_path_buf(),
            gradient: hashes.gradient.to_string(),
            mean: hashes.mean.to_string(),
            hashes,
        }
    }
}

/// Per-kind Hamming distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    pub gradient: u32,
    pub mean: u32,
}

impl From<HashDistance> for DistanceReport {
    fn from(distance: HashDistance) -> Self {
        Self {
            gradient: distance.gradient,
            mean: distance.mean,
        }
    }
}

/// Two files and how far apart their fingerprints are
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub files: [FileReport; 2],
    pub distance: DistanceReport,
}

impl ComparisonReport {
    pub fn new(first: FileReport, second: FileReport) -> Self {
        let distance = first.hashes.distance(&second.hashes).into();
        Self {
            files: [first, second],
            distance,
        }
    }
}
