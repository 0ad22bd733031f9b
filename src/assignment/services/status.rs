//! `pull`: fetch every repository and report its latest commit.

use super::{AssignmentService, MASTER_BRANCH, StatusRequest};
use crate::assignment::domain::{AssignmentError, AssignmentResult, StatusReport, StatusRow};
use crate::forge::domain::ForgeRepository;
use crate::forge::ports::{Forge, ForgeError};
use crate::operator::ports::OperatorPrompt;
use crate::operator::services::ConfirmationError;
use crate::roster::ports::RosterProvider;
use crate::vcs::domain::CommitSummary;
use crate::vcs::ports::{VcsResult, VersionControl};
use camino::Utf8Path;
use mockable::Clock;
use tracing::{info, warn};

impl<R, F, V, P, C> AssignmentService<R, F, V, P, C>
where
    R: RosterProvider,
    F: Forge,
    V: VersionControl,
    P: OperatorPrompt,
    C: Clock + Send + Sync,
{
    /// Fetches `master` of every repository into a local ref named after it
    /// and reports the newest commit.
    ///
    /// Failures become rows stamped with the current time instead of ending
    /// the batch. An operator abort stops the walk; the rows gathered so far
    /// are returned with [`StatusReport::aborted`] set.
    ///
    /// # Errors
    ///
    /// Returns roster and prompt failures only.
    pub async fn report_status(&self, request: &StatusRequest) -> AssignmentResult<StatusReport> {
        info!(source = %request.source, "showing the latest commits");
        let repos = self.targets(&request.batch, false)?;
        let mut policy = self.policy("pull", &request.batch);
        let mut rows = Vec::with_capacity(repos.len());
        let mut aborted = false;

        for repo in &repos {
            let hosted = match self.forge.get_repository(repo.name()).await {
                Ok(hosted) => hosted,
                Err(err) => {
                    let reason = match err {
                        ForgeError::NotFound(_) => "pull failed: repository not found".to_owned(),
                        other => format!("pull failed: {other}"),
                    };
                    warn!(repository = %repo.name(), %reason, "status unavailable");
                    rows.push(StatusRow::failure(
                        repo.name().clone(),
                        Some(repo.comment().to_owned()),
                        self.clock.utc(),
                        reason,
                    ));
                    continue;
                }
            };

            match policy.must_skip(repo.name()) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(ConfirmationError::Aborted) => {
                    aborted = true;
                    break;
                }
                Err(ConfirmationError::Prompt(err)) => return Err(AssignmentError::Prompt(err)),
            }

            let row = match self.latest_commit(&request.source, &hosted).await {
                Ok(commit) => StatusRow::commit(repo.name().clone(), hosted.description, commit),
                Err(err) => {
                    warn!(repository = %repo.name(), error = %err, "pull failed");
                    StatusRow::failure(
                        repo.name().clone(),
                        hosted.description,
                        self.clock.utc(),
                        format!("pull failed: {err}"),
                    )
                }
            };
            rows.push(row);
        }
        Ok(StatusReport::new(rows, aborted))
    }

    async fn latest_commit(
        &self,
        source: &Utf8Path,
        hosted: &ForgeRepository,
    ) -> VcsResult<CommitSummary> {
        let local_ref = hosted.name.as_str();
        self.vcs
            .fetch(source, &hosted.ssh_url, &format!("{MASTER_BRANCH}:{local_ref}"))
            .await?;
        self.vcs.last_commit(source, local_ref).await
    }
}
