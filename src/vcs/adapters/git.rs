//! `git` command-line adapter.

use super::{COMMIT_SUMMARY_FORMAT, parse_commit_summary};
use crate::vcs::domain::CommitSummary;
use crate::vcs::ports::{VcsError, VcsResult, VersionControl};
use async_trait::async_trait;
use camino::Utf8Path;
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

/// Runs the `git` binary found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    /// Uses `git` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Uses the given executable instead of `git`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, workdir: &Utf8Path, args: &[&str]) -> VcsResult<String> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(%workdir, %command, "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .output()
            .await
            .map_err(|err| VcsError::Spawn {
                command: command.clone(),
                source: Arc::new(err),
            })?;

        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn checkout(&self, workdir: &Utf8Path, reference: &str) -> VcsResult<()> {
        self.run(workdir, &["checkout", reference]).await?;
        Ok(())
    }

    async fn delete_branch(&self, workdir: &Utf8Path, branch: &str) -> VcsResult<()> {
        self.run(workdir, &["branch", "-D", branch]).await?;
        Ok(())
    }

    async fn create_branch(&self, workdir: &Utf8Path, branch: &str) -> VcsResult<()> {
        self.run(workdir, &["checkout", "-b", branch]).await?;
        Ok(())
    }

    async fn add_all(&self, workdir: &Utf8Path) -> VcsResult<()> {
        self.run(workdir, &["add", "-A"]).await?;
        Ok(())
    }

    async fn commit(&self, workdir: &Utf8Path, message: &str) -> VcsResult<()> {
        self.run(workdir, &["commit", "-m", message]).await?;
        Ok(())
    }

    async fn push(&self, workdir: &Utf8Path, remote: &str, refspec: &str) -> VcsResult<()> {
        self.run(workdir, &["push", remote, refspec]).await?;
        Ok(())
    }

    async fn fetch(&self, workdir: &Utf8Path, remote: &str, refspec: &str) -> VcsResult<()> {
        self.run(workdir, &["fetch", remote, refspec]).await?;
        Ok(())
    }

    async fn last_commit(&self, workdir: &Utf8Path, reference: &str) -> VcsResult<CommitSummary> {
        let args = ["log", reference, "-1", COMMIT_SUMMARY_FORMAT];
        let output = self.run(workdir, &args).await?;
        parse_commit_summary(&args.join(" "), &output)
    }

    async fn list_branches(&self, workdir: &Utf8Path) -> VcsResult<Vec<String>> {
        let output = self
            .run(
                workdir,
                &["for-each-ref", "--format=%(refname:short)", "refs/heads/*"],
            )
            .await?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }
}
