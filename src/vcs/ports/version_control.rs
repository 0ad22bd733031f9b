//! Version-control port.

use crate::vcs::domain::CommitSummary;
use async_trait::async_trait;
use camino::Utf8Path;
use std::sync::Arc;
use thiserror::Error;

/// Result type for version-control operations.
pub type VcsResult<T> = Result<T, VcsError>;

/// Operations on a local repository work tree.
///
/// Every operation runs inside `workdir`.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Checks out an existing branch or ref.
    async fn checkout(&self, workdir: &Utf8Path, reference: &str) -> VcsResult<()>;

    /// Force-deletes a local branch.
    async fn delete_branch(&self, workdir: &Utf8Path, branch: &str) -> VcsResult<()>;

    /// Creates `branch` from the current `HEAD` and checks it out.
    async fn create_branch(&self, workdir: &Utf8Path, branch: &str) -> VcsResult<()>;

    /// Stages every change in the work tree, deletions included.
    async fn add_all(&self, workdir: &Utf8Path) -> VcsResult<()>;

    /// Commits the staged changes.
    async fn commit(&self, workdir: &Utf8Path, message: &str) -> VcsResult<()>;

    /// Pushes `refspec` to `remote`.
    async fn push(&self, workdir: &Utf8Path, remote: &str, refspec: &str) -> VcsResult<()>;

    /// Fetches `refspec` from `remote`.
    async fn fetch(&self, workdir: &Utf8Path, remote: &str, refspec: &str) -> VcsResult<()>;

    /// Describes the newest commit reachable from `reference`.
    async fn last_commit(&self, workdir: &Utf8Path, reference: &str) -> VcsResult<CommitSummary>;

    /// Lists local branch names.
    async fn list_branches(&self, workdir: &Utf8Path) -> VcsResult<Vec<String>>;
}

/// Errors raised by version-control adapters.
#[derive(Debug, Clone, Error)]
pub enum VcsError {
    /// The command could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Command line that failed to start.
        command: String,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The command ran and exited unsuccessfully.
    #[error("`{command}` failed: {stderr}")]
    CommandFailed {
        /// Command line that failed.
        command: String,
        /// Exit code, if the process exited normally.
        status: Option<i32>,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// The command output could not be interpreted.
    #[error("unexpected output from `{command}`: {output}")]
    MalformedOutput {
        /// Command line whose output was rejected.
        command: String,
        /// Offending output.
        output: String,
    },
}
