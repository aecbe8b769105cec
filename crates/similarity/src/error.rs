//! Error types for loading similarity configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or compiling a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML could not be parsed
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON could not be parsed
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A rename rule marked as regex does not compile
    #[error("Invalid rename pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The file extension does not name a known format
    #[error("Unsupported config format for '{0}', expected .yaml, .yml or .json")]
    UnsupportedFormat(PathBuf),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
