//! Per-repository results of a batch.

use crate::roster::domain::RepoName;
use std::fmt;

/// Why a repository was not acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The operator chose to skip it.
    Declined,
    /// The repository does not exist on the forge.
    RepositoryMissing,
    /// The repository to create already exists.
    AlreadyExists,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Declined => "declined by operator",
            Self::RepositoryMissing => "repository missing",
            Self::AlreadyExists => "repository already exists",
        })
    }
}

/// Terminal state of one repository in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoOutcome {
    /// The workflow's action was performed.
    Acted,
    /// The repository was skipped.
    Skipped(SkipReason),
}

/// Ordered outcomes of a completed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    entries: Vec<(RepoName, RepoOutcome)>,
}

impl BatchSummary {
    /// Records that `repo` was acted upon.
    pub fn acted(&mut self, repo: &RepoName) {
        self.entries.push((repo.clone(), RepoOutcome::Acted));
    }

    /// Records that `repo` was skipped.
    pub fn skipped(&mut self, repo: &RepoName, reason: SkipReason) {
        self.entries
            .push((repo.clone(), RepoOutcome::Skipped(reason)));
    }

    /// Returns the outcomes in processing order.
    #[must_use]
    pub fn entries(&self) -> &[(RepoName, RepoOutcome)] {
        &self.entries
    }

    /// Returns the repositories acted upon, in order.
    #[must_use]
    pub fn acted_repos(&self) -> Vec<&RepoName> {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == RepoOutcome::Acted)
            .map(|(repo, _)| repo)
            .collect()
    }

    /// Returns the outcome recorded for `repo`.
    #[must_use]
    pub fn outcome_of(&self, repo: &str) -> Option<RepoOutcome> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == repo)
            .map(|(_, outcome)| *outcome)
    }
}
