//! Request payloads for the workflows.

use crate::roster::domain::RosterSelection;
use crate::template::domain::IssuePlan;
use camino::Utf8PathBuf;

/// Options shared by every batch command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Roster filter from `--students` / `--groups`.
    pub selection: RosterSelection,
    /// `--yes`: skip the eligibility review and every confirmation.
    pub assume_yes: bool,
}

impl BatchOptions {
    /// Creates options for `selection`, asking for confirmation.
    #[must_use]
    pub const fn new(selection: RosterSelection) -> Self {
        Self {
            selection,
            assume_yes: false,
        }
    }

    /// Sets whether every confirmation is pre-approved.
    #[must_use]
    pub const fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

/// Input of `create-repos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReposRequest {
    /// Batch options.
    pub batch: BatchOptions,
    /// Local checkout holding the starter code on `master`.
    pub source: Utf8PathBuf,
}

/// Input of `create-pr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestUpdate {
    /// Batch options.
    pub batch: BatchOptions,
    /// Remote branch receiving the update.
    pub branch: String,
    /// Pull request title.
    pub title: String,
    /// Pull request body.
    pub body: String,
    /// Local checkout to push from; unused when `already_pushed`.
    pub source: Option<Utf8PathBuf>,
    /// Local ref pushed to `branch`.
    pub from: String,
    /// The branch exists remotely already; only open the pull requests.
    pub already_pushed: bool,
}

impl PullRequestUpdate {
    /// Creates an update pushing `master` to `branch`.
    #[must_use]
    pub fn new(
        batch: BatchOptions,
        branch: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            batch,
            branch: branch.into(),
            title: title.into(),
            body: body.into(),
            source: None,
            from: super::MASTER_BRANCH.to_owned(),
            already_pushed: false,
        }
    }

    /// Sets the local checkout.
    #[must_use]
    pub fn with_source(mut self, source: Option<Utf8PathBuf>) -> Self {
        self.source = source;
        self
    }

    /// Sets the local ref to push.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Marks the branch as already pushed.
    #[must_use]
    pub const fn with_already_pushed(mut self, already_pushed: bool) -> Self {
        self.already_pushed = already_pushed;
        self
    }
}

/// Input of `create-issues`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssuesRequest {
    /// Batch options.
    pub batch: BatchOptions,
    /// Records to seed into every repository.
    pub plan: IssuePlan,
}

/// Input of `pull`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRequest {
    /// Batch options.
    pub batch: BatchOptions,
    /// Local checkout receiving one ref per repository.
    pub source: Utf8PathBuf,
}
