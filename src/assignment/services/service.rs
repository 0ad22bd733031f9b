//! Shared workflow plumbing.

use super::BatchOptions;
use crate::assignment::domain::{AssignmentResult, BatchSummary, SkipReason};
use crate::forge::domain::ForgeRepository;
use crate::forge::ports::{Forge, ForgeError};
use crate::operator::domain::GroupExpectation;
use crate::operator::ports::OperatorPrompt;
use crate::operator::services::{ContinuePolicy, select_eligible};
use crate::roster::domain::StudentRepo;
use crate::roster::ports::RosterProvider;
use crate::vcs::ports::VersionControl;
use mockable::Clock;
use std::sync::Arc;
use tracing::warn;

/// Branch every repository is created with and pull requests target.
pub const MASTER_BRANCH: &str = "master";

/// Runs the assignment workflows against injected collaborators.
#[derive(Clone)]
pub struct AssignmentService<R, F, V, P, C>
where
    R: RosterProvider,
    F: Forge,
    V: VersionControl,
    P: OperatorPrompt,
    C: Clock + Send + Sync,
{
    pub(super) roster: Arc<R>,
    pub(super) forge: Arc<F>,
    pub(super) vcs: Arc<V>,
    pub(super) prompt: Arc<P>,
    pub(super) clock: Arc<C>,
    expectation: GroupExpectation,
}

impl<R, F, V, P, C> AssignmentService<R, F, V, P, C>
where
    R: RosterProvider,
    F: Forge,
    V: VersionControl,
    P: OperatorPrompt,
    C: Clock + Send + Sync,
{
    /// Creates a service; `expectation` drives the eligibility filter.
    #[must_use]
    pub const fn new(
        roster: Arc<R>,
        forge: Arc<F>,
        vcs: Arc<V>,
        prompt: Arc<P>,
        clock: Arc<C>,
        expectation: GroupExpectation,
    ) -> Self {
        Self {
            roster,
            forge,
            vcs,
            prompt,
            clock,
            expectation,
        }
    }

    /// Resolves the roster; with `reviewed` set and without `--yes`, runs
    /// the eligibility filter on the result.
    pub(super) fn targets(
        &self,
        batch: &BatchOptions,
        reviewed: bool,
    ) -> AssignmentResult<Vec<StudentRepo>> {
        let repos = self.roster.resolve(&batch.selection)?;
        if !reviewed || batch.assume_yes {
            return Ok(repos);
        }
        Ok(select_eligible(repos, &self.expectation, self.prompt.as_ref())?)
    }

    pub(super) fn policy(&self, action: &str, batch: &BatchOptions) -> ContinuePolicy<'_, P> {
        ContinuePolicy::new(self.prompt.as_ref(), action, batch.assume_yes)
    }

    /// Looks the repository up, recording a skip when it does not exist.
    pub(super) async fn hosted_or_skip(
        &self,
        repo: &StudentRepo,
        summary: &mut BatchSummary,
    ) -> AssignmentResult<Option<ForgeRepository>> {
        match self.forge.get_repository(repo.name()).await {
            Ok(hosted) => Ok(Some(hosted)),
            Err(ForgeError::NotFound(_)) => {
                warn!(
                    organisation = %self.forge.organisation_url(),
                    repository = %repo.name(),
                    "repository not found, skipping"
                );
                summary.skipped(repo.name(), SkipReason::RepositoryMissing);
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
