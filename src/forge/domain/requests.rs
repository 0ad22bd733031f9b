//! Payloads for forge write operations.

use chrono::{DateTime, Utc};

/// Request to open a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    /// Pull request title.
    pub title: String,
    /// Pull request description.
    pub body: String,
    /// Branch holding the changes.
    pub head: String,
    /// Branch the changes should be merged into.
    pub base: String,
}

/// Request to create a milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMilestone {
    /// Milestone title.
    pub title: String,
    /// Milestone description.
    pub description: Option<String>,
    /// Due date.
    pub due_on: Option<DateTime<Utc>>,
}

/// Request to create an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Issue title.
    pub title: String,
    /// Issue body.
    pub body: String,
    /// Number of the milestone the issue belongs to.
    pub milestone: Option<u64>,
    /// Labels applied to the issue.
    pub labels: Vec<String>,
    /// Usernames assigned to the issue.
    pub assignees: Vec<String>,
}
