//! Error types for configuration loading.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors returned while loading the course configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file '{0}' was not found")]
    NotFound(Utf8PathBuf),

    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The configuration file is not valid YAML for a course.
    #[error("failed to parse configuration file '{path}': {source}")]
    Parse {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying YAML error.
        source: Arc<serde_yaml::Error>,
    },

    /// The organisation URL cannot be parsed or names no organisation.
    #[error("invalid organisation url '{0}'")]
    InvalidUrl(String),
}
