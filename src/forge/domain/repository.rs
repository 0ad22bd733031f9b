//! Records returned by the forge.

use crate::roster::domain::RepoName;

/// A repository hosted on the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeRepository {
    /// Repository name inside the organisation.
    pub name: RepoName,
    /// HTTPS clone URL.
    pub clone_url: String,
    /// SSH clone URL, used for pushes and fetches.
    pub ssh_url: String,
    /// Web page of the repository.
    pub html_url: String,
    /// Repository description.
    pub description: Option<String>,
}

/// A milestone of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Forge-assigned milestone number.
    pub number: u64,
    /// Milestone title.
    pub title: String,
}

/// An opened pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Forge-assigned pull request number.
    pub number: u64,
    /// Web page of the pull request.
    pub html_url: String,
}

/// A pending invitation to collaborate on a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    /// Forge-assigned invitation identifier.
    pub id: u64,
    /// Invited username; `None` for invitations sent to an e-mail address.
    pub invitee: Option<String>,
}
