//! Latest-commit status report.

use crate::roster::domain::RepoName;
use crate::vcs::domain::CommitSummary;
use chrono::{DateTime, Utc};

/// One line of the status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Repository name.
    pub repo: RepoName,
    /// Repository description (or roster comment when it is missing).
    pub description: Option<String>,
    /// Commit time, or the time of the failure.
    pub time: DateTime<Utc>,
    /// Commit author as `Name <email>`; empty for failures.
    pub committer: Option<String>,
    /// Commit subject or failure text.
    pub summary: String,
}

impl StatusRow {
    /// Row for a successfully inspected repository.
    #[must_use]
    pub fn commit(repo: RepoName, description: Option<String>, commit: CommitSummary) -> Self {
        Self {
            repo,
            description,
            time: commit.time,
            committer: Some(commit.author),
            summary: commit.subject,
        }
    }

    /// Row for a repository that could not be inspected.
    #[must_use]
    pub fn failure(
        repo: RepoName,
        description: Option<String>,
        time: DateTime<Utc>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            description,
            time,
            committer: None,
            summary: reason.into(),
        }
    }

    /// Returns `true` for failure rows.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.committer.is_none()
    }
}

/// Status rows sorted by time, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    rows: Vec<StatusRow>,
    aborted: bool,
}

impl StatusReport {
    /// Builds a report, ordering `rows` by time; equal times keep their
    /// original order.
    #[must_use]
    pub fn new(mut rows: Vec<StatusRow>, aborted: bool) -> Self {
        rows.sort_by_key(|row| row.time);
        Self { rows, aborted }
    }

    /// Returns the rows, oldest first.
    #[must_use]
    pub fn rows(&self) -> &[StatusRow] {
        &self.rows
    }

    /// Returns `true` when the operator aborted before every repository was
    /// visited.
    #[must_use]
    pub const fn aborted(&self) -> bool {
        self.aborted
    }
}
