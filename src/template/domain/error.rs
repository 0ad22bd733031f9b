//! Error types for template rendering and issue plans.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for rendering operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Result type for issue plan loading.
pub type IssuePlanResult<T> = Result<T, IssuePlanError>;

/// Errors raised while rendering templates.
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// A template string failed to render.
    #[error("template rendering failed: {reason}")]
    Render {
        /// Renderer diagnostic.
        reason: String,
    },

    /// A template file in a source tree failed to render.
    #[error("problem generating template for path={path} clone_url={clone_url}: {reason}")]
    File {
        /// Template file path.
        path: Utf8PathBuf,
        /// Clone URL the file was rendered for.
        clone_url: String,
        /// Renderer or I/O diagnostic.
        reason: String,
    },

    /// The source tree could not be walked.
    #[error("failed to walk source tree '{path}': {source}")]
    Walk {
        /// Directory being walked.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },
}

/// Errors raised while loading an issue plan.
#[derive(Debug, Clone, Error)]
pub enum IssuePlanError {
    /// The plan file does not exist.
    #[error("issue plan '{0}' was not found")]
    NotFound(Utf8PathBuf),

    /// The plan file could not be read.
    #[error("failed to read issue plan '{path}': {source}")]
    Read {
        /// Plan file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The plan is not a sequence of known records.
    #[error("invalid issue plan: {0}")]
    Parse(Arc<serde_yaml::Error>),

    /// The plan holds no records.
    #[error("issue plan contains no records")]
    Empty,
}
