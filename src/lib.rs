//! pnghash - perceptual hashes for PNG images
//!
//! Command-line front end for the `png-phash` library.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
