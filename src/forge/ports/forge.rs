//! Forge port covering every remote operation the workflows need.

use crate::forge::domain::{
    ForgeRepository, Invitation, Milestone, NewIssue, NewMilestone, NewPullRequest, PullRequest,
};
use crate::roster::domain::RepoName;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for forge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Remote code-hosting operations, scoped to one organisation.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Returns the web URL of the organisation, used in operator messages.
    fn organisation_url(&self) -> String;

    /// Looks up a repository.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::NotFound`] when the repository does not exist.
    async fn get_repository(&self, name: &RepoName) -> ForgeResult<ForgeRepository>;

    /// Creates a repository.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::AlreadyExists`] when the name is taken.
    async fn create_repository(&self, name: &RepoName, private: bool)
    -> ForgeResult<ForgeRepository>;

    /// Protects `branch` against force pushes and deletion.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the forge rejects the change.
    async fn protect_branch(&self, repo: &RepoName, branch: &str) -> ForgeResult<()>;

    /// Replaces the repository description.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the forge rejects the change.
    async fn set_description(&self, repo: &RepoName, description: &str) -> ForgeResult<()>;

    /// Opens a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the forge rejects the pull request.
    async fn create_pull_request(
        &self,
        repo: &RepoName,
        request: &NewPullRequest,
    ) -> ForgeResult<PullRequest>;

    /// Creates a milestone.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::AlreadyExists`] when a milestone with the same
    /// title exists.
    async fn create_milestone(
        &self,
        repo: &RepoName,
        request: &NewMilestone,
    ) -> ForgeResult<Milestone>;

    /// Lists milestones in forge order.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the listing fails.
    async fn list_milestones(&self, repo: &RepoName) -> ForgeResult<Vec<Milestone>>;

    /// Creates an issue and returns its number.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the forge rejects the issue.
    async fn create_issue(&self, repo: &RepoName, request: &NewIssue) -> ForgeResult<u64>;

    /// Grants `username` collaborator access (this sends an invitation).
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the forge rejects the change.
    async fn add_collaborator(&self, repo: &RepoName, username: &str) -> ForgeResult<()>;

    /// Revokes collaborator access from `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the forge rejects the change.
    async fn remove_collaborator(&self, repo: &RepoName, username: &str) -> ForgeResult<()>;

    /// Lists pending collaborator invitations.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] when the listing fails.
    async fn list_invitations(&self, repo: &RepoName) -> ForgeResult<Vec<Invitation>>;

    /// Withdraws a pending invitation.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::NotFound`] when the invitation no longer exists.
    async fn delete_invitation(&self, repo: &RepoName, invitation_id: u64) -> ForgeResult<()>;
}

/// Outcome categories of a failed forge operation.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// The addressed resource does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The resource to create already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// The forge rejected the request for another reason.
    #[error("forge returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message reported by the forge.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("forge transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ForgeError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` for [`ForgeError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
