//! Summary of a single commit.

use chrono::{DateTime, Utc};

/// The facts the status report shows about a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Commit timestamp.
    pub time: DateTime<Utc>,
    /// Author as `Name <email>`.
    pub author: String,
    /// First line of the commit message.
    pub subject: String,
}

impl CommitSummary {
    /// Builds a summary from its parts.
    #[must_use]
    pub fn new(time: DateTime<Utc>, author: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            time,
            author: author.into(),
            subject: subject.into(),
        }
    }
}
