//! Error types for roster value validation.

use thiserror::Error;

/// Errors returned while constructing roster values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The repository name is empty or contains characters a forge rejects.
    #[error("invalid repository name '{0}'")]
    InvalidRepoName(String),

    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,
}
