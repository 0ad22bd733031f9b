//! Wire representations of GitHub REST payloads.

use crate::forge::domain::{ForgeRepository, Invitation, Milestone, NewIssue, NewMilestone};
use crate::forge::ports::{ForgeError, ForgeResult};
use crate::roster::domain::RepoName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct RepositoryRecord {
    pub name: String,
    pub clone_url: String,
    pub ssh_url: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RepositoryRecord {
    pub fn into_domain(self) -> ForgeResult<ForgeRepository> {
        let name = RepoName::new(&self.name).map_err(ForgeError::transport)?;
        Ok(ForgeRepository {
            name,
            clone_url: self.clone_url,
            ssh_url: self.ssh_url,
            html_url: self.html_url,
            description: self.description,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct MilestoneRecord {
    pub number: u64,
    pub title: String,
}

impl From<MilestoneRecord> for Milestone {
    fn from(record: MilestoneRecord) -> Self {
        Self {
            number: record.number,
            title: record.title,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct NumberedRecord {
    pub number: u64,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserRecord {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct InvitationRecord {
    pub id: u64,
    #[serde(default)]
    pub invitee: Option<UserRecord>,
}

impl From<InvitationRecord> for Invitation {
    fn from(record: InvitationRecord) -> Self {
        Self {
            id: record.id,
            invitee: record.invitee.map(|user| user.login),
        }
    }
}

/// Error body returned by GitHub for rejected requests.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorBody {
    /// A validation failure whose single cause is a duplicate resource.
    pub fn is_single_already_exists(&self) -> bool {
        matches!(
            self.errors.as_slice(),
            [ApiErrorDetail { code: Some(code) }] if code == "already_exists"
        )
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateRepositoryRequest<'a> {
    pub name: &'a str,
    pub private: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct EditRepositoryRequest<'a> {
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct CreatePullRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub head: &'a str,
    pub base: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateMilestoneRequest<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
}

impl<'a> From<&'a NewMilestone> for CreateMilestoneRequest<'a> {
    fn from(milestone: &'a NewMilestone) -> Self {
        Self {
            title: &milestone.title,
            description: milestone.description.as_deref(),
            due_on: milestone.due_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateIssueRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    pub labels: &'a [String],
    pub assignees: &'a [String],
}

impl<'a> From<&'a NewIssue> for CreateIssueRequest<'a> {
    fn from(issue: &'a NewIssue) -> Self {
        Self {
            title: &issue.title,
            body: &issue.body,
            milestone: issue.milestone,
            labels: &issue.labels,
            assignees: &issue.assignees,
        }
    }
}

/// Branch protection that only forbids force pushes and deletion.
#[derive(Debug, Serialize)]
pub(super) struct BranchProtectionRequest {
    pub required_status_checks: Option<()>,
    pub enforce_admins: Option<()>,
    pub required_pull_request_reviews: Option<()>,
    pub restrictions: Option<()>,
    pub allow_force_pushes: bool,
    pub allow_deletions: bool,
}

impl BranchProtectionRequest {
    pub const fn locked() -> Self {
        Self {
            required_status_checks: None,
            enforce_admins: None,
            required_pull_request_reviews: None,
            restrictions: None,
            allow_force_pushes: false,
            allow_deletions: false,
        }
    }
}
