//! `create-repos`: one private repository per group, seeded from a template
//! checkout.

use super::{AssignmentService, CreateReposRequest, MASTER_BRANCH};
use crate::assignment::domain::{AssignmentResult, BatchSummary, SkipReason};
use crate::forge::domain::ForgeRepository;
use crate::forge::ports::{Forge, ForgeError};
use crate::operator::ports::OperatorPrompt;
use crate::roster::domain::StudentRepo;
use crate::roster::ports::RosterProvider;
use crate::template::domain::RepoContext;
use crate::template::services::render_tree;
use crate::vcs::ports::VersionControl;
use camino::Utf8Path;
use mockable::Clock;
use tracing::{debug, info, warn};

const TEMPLATE_COMMIT_MESSAGE: &str = "fill in templates";

impl<R, F, V, P, C> AssignmentService<R, F, V, P, C>
where
    R: RosterProvider,
    F: Forge,
    V: VersionControl,
    P: OperatorPrompt,
    C: Clock + Send + Sync,
{
    /// Creates and populates the repository of every selected group.
    ///
    /// For each repository: create it privately, render the templates of
    /// `source` on a branch named after the repository, push that branch to
    /// the new repository's `master`, protect `master` and set the
    /// description to the group comment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::assignment::domain::AssignmentError::Aborted`] when
    /// the operator aborts, and any git, forge or template failure other
    /// than "already exists".
    pub async fn create_repos(&self, request: &CreateReposRequest) -> AssignmentResult<BatchSummary> {
        info!(source = %request.source, "creating student repositories");
        let repos = self.targets(&request.batch, true)?;
        let mut policy = self.policy("create the repo", &request.batch);
        let mut summary = BatchSummary::default();

        for repo in &repos {
            if policy.must_skip(repo.name())? {
                summary.skipped(repo.name(), SkipReason::Declined);
                continue;
            }

            let hosted = match self.forge.create_repository(repo.name(), true).await {
                Ok(hosted) => hosted,
                Err(ForgeError::AlreadyExists(_)) => {
                    warn!(
                        organisation = %self.forge.organisation_url(),
                        repository = %repo.name(),
                        "repository already exists; skipping"
                    );
                    summary.skipped(repo.name(), SkipReason::AlreadyExists);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            info!(repository = %repo.name(), url = %hosted.html_url, "generating repository");

            self.populate(&request.source, repo, &hosted).await?;

            info!(repository = %repo.name(), "protecting master against history rewrites");
            self.forge.protect_branch(repo.name(), MASTER_BRANCH).await?;
            self.forge
                .set_description(repo.name(), repo.comment())
                .await?;
            summary.acted(repo.name());
        }
        Ok(summary)
    }

    async fn populate(
        &self,
        source: &Utf8Path,
        repo: &StudentRepo,
        hosted: &ForgeRepository,
    ) -> AssignmentResult<()> {
        let branch = repo.name().as_str();
        self.vcs.checkout(source, MASTER_BRANCH).await?;
        if let Err(err) = self.vcs.delete_branch(source, branch).await {
            debug!(%branch, error = %err, "no stale branch to delete");
        }
        self.vcs.create_branch(source, branch).await?;

        let context = RepoContext::new(&hosted.clone_url, repo);
        let rendered = render_tree(source, &context)?;
        debug!(repository = %repo.name(), files = rendered.len(), "rendered templates");

        self.vcs.add_all(source).await?;
        if let Err(err) = self.vcs.commit(source, TEMPLATE_COMMIT_MESSAGE).await {
            debug!(%branch, error = %err, "nothing to commit");
        }
        info!(remote = %hosted.ssh_url, "pushing source");
        self.vcs
            .push(source, &hosted.ssh_url, &format!("{branch}:{MASTER_BRANCH}"))
            .await?;
        self.vcs.checkout(source, MASTER_BRANCH).await?;
        Ok(())
    }
}
