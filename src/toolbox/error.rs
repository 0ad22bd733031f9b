//! Toolbox error type.

use crate::vcs::ports::VcsError;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for toolbox helpers.
pub type ToolboxResult<T> = Result<T, ToolboxError>;

/// Errors raised by toolbox helpers.
#[derive(Debug, Clone, Error)]
pub enum ToolboxError {
    /// A file or directory could not be accessed.
    #[error("i/o failure on '{path}': {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// A version-control command failed.
    #[error(transparent)]
    Vcs(#[from] VcsError),
}

impl ToolboxError {
    pub(super) fn io(path: impl Into<Utf8PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let owned = path.into();
        move |err| Self::Io {
            path: owned,
            source: Arc::new(err),
        }
    }
}
