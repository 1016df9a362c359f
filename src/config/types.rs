use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the deck and selection are persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store directory (default: `<data dir>/slidegen`).
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// PDF export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Pixel multiplier over the 960×540 page, 1..=4 (default: 3).
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// JPEG quality of each page, 1..=100 (default: 90).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Output file name used when no path is given.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append logs here instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_scale() -> u32 {
    3
}

fn default_jpeg_quality() -> u8 {
    90
}

fn default_file_name() -> String {
    "presentation.pdf".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            jpeg_quality: default_jpeg_quality(),
            file_name: default_file_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
