//! Recording version-control adapter for workflow tests.

use crate::vcs::domain::CommitSummary;
use crate::vcs::ports::{VcsError, VcsResult, VersionControl};
use async_trait::async_trait;
use camino::Utf8Path;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Records every call as a `git` argument line and succeeds unless told not
/// to.
///
/// Commands are recorded before the failure check, so a failing command still
/// shows up in [`RecordingVcs::commands`].
#[derive(Debug, Clone, Default)]
pub struct RecordingVcs {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    commands: Vec<String>,
    failing_prefixes: Vec<String>,
    commits: HashMap<String, CommitSummary>,
    branches: Vec<String>,
}

impl RecordingVcs {
    /// Creates a recorder where every command succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every command starting with `prefix` fail.
    #[must_use]
    pub fn failing(self, prefix: impl Into<String>) -> Self {
        self.lock().failing_prefixes.push(prefix.into());
        self
    }

    /// Makes `last_commit(reference)` return `summary`.
    #[must_use]
    pub fn with_commit(self, reference: impl Into<String>, summary: CommitSummary) -> Self {
        self.lock().commits.insert(reference.into(), summary);
        self
    }

    /// Sets the branches reported by `list_branches`.
    #[must_use]
    pub fn with_branches(self, branches: impl IntoIterator<Item = String>) -> Self {
        self.lock().branches = branches.into_iter().collect();
        self
    }

    /// Returns the recorded command lines in call order.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.lock().commands.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, args: &[&str]) -> VcsResult<()> {
        let command = args.join(" ");
        let mut state = self.lock();
        state.commands.push(command.clone());
        if state
            .failing_prefixes
            .iter()
            .any(|prefix| command.starts_with(prefix.as_str()))
        {
            return Err(VcsError::CommandFailed {
                command,
                status: Some(1),
                stderr: "scripted failure".to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VersionControl for RecordingVcs {
    async fn checkout(&self, _workdir: &Utf8Path, reference: &str) -> VcsResult<()> {
        self.record(&["checkout", reference])
    }

    async fn delete_branch(&self, _workdir: &Utf8Path, branch: &str) -> VcsResult<()> {
        self.record(&["branch", "-D", branch])
    }

    async fn create_branch(&self, _workdir: &Utf8Path, branch: &str) -> VcsResult<()> {
        self.record(&["checkout", "-b", branch])
    }

    async fn add_all(&self, _workdir: &Utf8Path) -> VcsResult<()> {
        self.record(&["add", "-A"])
    }

    async fn commit(&self, _workdir: &Utf8Path, message: &str) -> VcsResult<()> {
        self.record(&["commit", "-m", message])
    }

    async fn push(&self, _workdir: &Utf8Path, remote: &str, refspec: &str) -> VcsResult<()> {
        self.record(&["push", remote, refspec])
    }

    async fn fetch(&self, _workdir: &Utf8Path, remote: &str, refspec: &str) -> VcsResult<()> {
        self.record(&["fetch", remote, refspec])
    }

    async fn last_commit(&self, _workdir: &Utf8Path, reference: &str) -> VcsResult<CommitSummary> {
        self.record(&["log", reference, "-1"])?;
        self.lock()
            .commits
            .get(reference)
            .cloned()
            .ok_or_else(|| VcsError::CommandFailed {
                command: format!("log {reference} -1"),
                status: Some(128),
                stderr: format!("unknown revision {reference}"),
            })
    }

    async fn list_branches(&self, _workdir: &Utf8Path) -> VcsResult<Vec<String>> {
        self.record(&["for-each-ref", "refs/heads/*"])?;
        Ok(self.lock().branches.clone())
    }
}
