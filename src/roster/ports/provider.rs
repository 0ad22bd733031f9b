//! Provider port that turns the roster into group repositories.

use crate::roster::domain::{RosterDomainError, RosterSelection, StudentRepo};
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for roster provider operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Resolves the course roster into the repositories commands operate on.
pub trait RosterProvider: Send + Sync {
    /// Returns the repositories matching `selection`, in roster order.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] when the roster cannot be read or contains
    /// invalid entries.
    fn resolve(&self, selection: &RosterSelection) -> RosterResult<Vec<StudentRepo>>;
}

/// Errors returned by roster providers.
#[derive(Debug, Clone, Error)]
pub enum RosterError {
    /// A configured roster file does not exist.
    #[error("roster source '{0}' was not found")]
    SourceNotFound(Utf8PathBuf),

    /// The roster file has no column with the mapped name.
    #[error("roster source '{path}' has no column '{column}'")]
    MissingColumn {
        /// Roster file path.
        path: Utf8PathBuf,
        /// Column named by the field mapping.
        column: String,
    },

    /// The comment template could not be rendered for a row.
    #[error("comment template failed for '{username}': {reason}")]
    CommentTemplate {
        /// Username of the offending row.
        username: String,
        /// Renderer diagnostic.
        reason: String,
    },

    /// A roster value failed validation.
    #[error(transparent)]
    Domain(#[from] RosterDomainError),

    /// Reading or parsing the roster failed.
    #[error("failed to read roster source '{path}': {source}")]
    Read {
        /// Roster file path.
        path: Utf8PathBuf,
        /// Underlying I/O or CSV error.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl RosterError {
    /// Wraps an I/O or parse error for `path`.
    pub fn read(
        path: impl Into<Utf8PathBuf>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Read {
            path: path.into(),
            source: Arc::new(err),
        }
    }
}
