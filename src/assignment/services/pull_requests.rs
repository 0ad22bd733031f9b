//! `create-pr`: push an update branch and open a pull request into `master`.

use super::{AssignmentService, MASTER_BRANCH, PullRequestUpdate};
use crate::assignment::domain::{AssignmentError, AssignmentResult, BatchSummary, SkipReason};
use crate::forge::domain::NewPullRequest;
use crate::forge::ports::Forge;
use crate::operator::ports::OperatorPrompt;
use crate::roster::ports::RosterProvider;
use crate::vcs::ports::VersionControl;
use mockable::Clock;
use tracing::info;

impl<R, F, V, P, C> AssignmentService<R, F, V, P, C>
where
    R: RosterProvider,
    F: Forge,
    V: VersionControl,
    P: OperatorPrompt,
    C: Clock + Send + Sync,
{
    /// Pushes `request.from` to `request.branch` in every selected
    /// repository (unless already pushed) and opens a pull request from that
    /// branch into `master`.
    ///
    /// Without `--yes` the operator first confirms the request details.
    /// Missing repositories are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::MissingSource`] when a push is needed but
    /// no checkout was given, [`AssignmentError::Aborted`] when the operator
    /// declines or aborts, and any other git or forge failure.
    pub async fn create_pull_requests(
        &self,
        request: &PullRequestUpdate,
    ) -> AssignmentResult<BatchSummary> {
        let source = match (&request.source, request.already_pushed) {
            (_, true) => None,
            (Some(source), false) => Some(source.as_path()),
            (None, false) => return Err(AssignmentError::MissingSource),
        };

        if !request.batch.assume_yes {
            self.confirm_update(request)?;
        }

        let repos = self.targets(&request.batch, true)?;
        let mut policy = self.policy("create the PR", &request.batch);
        let mut summary = BatchSummary::default();
        let pull = NewPullRequest {
            title: request.title.clone(),
            body: request.body.clone(),
            head: request.branch.clone(),
            base: MASTER_BRANCH.to_owned(),
        };

        for repo in &repos {
            let Some(hosted) = self.hosted_or_skip(repo, &mut summary).await? else {
                continue;
            };
            if policy.must_skip(repo.name())? {
                summary.skipped(repo.name(), SkipReason::Declined);
                continue;
            }

            if let Some(workdir) = source {
                let refspec = format!("{}:{}", request.from, request.branch);
                info!(%workdir, remote = %hosted.ssh_url, %refspec, "pushing update branch");
                self.vcs.push(workdir, &hosted.ssh_url, &refspec).await?;
            }

            let opened = self.forge.create_pull_request(repo.name(), &pull).await?;
            info!(repository = %repo.name(), url = %opened.html_url, "created pull request");
            summary.acted(repo.name());
        }
        Ok(summary)
    }

    fn confirm_update(&self, request: &PullRequestUpdate) -> AssignmentResult<()> {
        let origin = match (&request.source, request.already_pushed) {
            (_, true) => "Branch has been pushed already.".to_owned(),
            (Some(source), false) => format!("Source directory: '{source}' (pushing {})", request.from),
            (None, false) => String::new(),
        };
        self.prompt.notify(&format!(
            "Branch: '{}'\nTitle: '{}'\nMessage: '{}'\n{origin}",
            request.branch, request.title, request.body
        ));
        if self.prompt.confirm(
            "Please check if the above information is correct.\nDo you want to continue?",
            false,
        )? {
            Ok(())
        } else {
            Err(AssignmentError::Aborted)
        }
    }
}
