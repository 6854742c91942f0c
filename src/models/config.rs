use serde::Deserialize;
use std::path::Path;

use png_phash::DecodeLimits;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `0x<gradient> 0x<mean>` per file
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Report format when `--format` is not given
    pub output: OutputFormat,

    /// Largest `width * height` decoded when `--max-pixels` is not given
    pub max_pixels: u64,
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults.
    ///
    /// No path means defaults without a warning; a path that cannot be read
    /// or parsed logs a warning and also yields defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        output = ?config.output,
                        max_pixels = config.max_pixels,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, output: Option<OutputFormat>, max_pixels: Option<u64>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(max_pixels) = max_pixels {
            self.max_pixels = max_pixels;
        }
        self
    }

    pub fn decode_limits(&self) -> DecodeLimits {
        DecodeLimits::new().max_pixels(self.max_pixels)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            max_pixels: DecodeLimits::DEFAULT_MAX_PIXELS,
        }
    }
}
