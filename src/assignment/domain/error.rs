//! Workflow error type.

use crate::forge::ports::ForgeError;
use crate::operator::ports::OperatorPromptError;
use crate::operator::services::ConfirmationError;
use crate::roster::domain::RepoName;
use crate::roster::ports::RosterError;
use crate::template::domain::TemplateError;
use crate::vcs::ports::VcsError;
use thiserror::Error;

/// Result type for assignment workflows.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Errors that end a workflow early.
///
/// Repositories processed before the error keep their side effects.
#[derive(Debug, Clone, Error)]
pub enum AssignmentError {
    /// The operator aborted the batch.
    #[error("aborted by operator")]
    Aborted,

    /// The workflow needs a local checkout and none was given.
    #[error("no source directory given; pass --source or set `source` in the configuration")]
    MissingSource,

    /// An issue refers to a milestone the repository does not have.
    #[error("milestone {title:?} does not exist in {repo}")]
    MilestoneNotFound {
        /// Repository being seeded.
        repo: RepoName,
        /// Milestone title from the issue plan.
        title: String,
    },

    /// The roster could not be resolved.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The operator could not be asked.
    #[error(transparent)]
    Prompt(#[from] OperatorPromptError),

    /// A forge call failed.
    #[error(transparent)]
    Forge(#[from] ForgeError),

    /// A version-control command failed.
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// A template failed to render.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl From<ConfirmationError> for AssignmentError {
    fn from(err: ConfirmationError) -> Self {
        match err {
            ConfirmationError::Aborted => Self::Aborted,
            ConfirmationError::Prompt(prompt) => Self::Prompt(prompt),
        }
    }
}
