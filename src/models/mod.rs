pub mod config;
pub mod report;

pub use config::{AppConfig, OutputFormat};
pub use report::{ComparisonReport, DistanceReport, FileReport};
