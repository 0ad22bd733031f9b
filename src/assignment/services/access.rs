//! `grant` / `remove-grant`: student collaborator access.

use super::{AssignmentService, BatchOptions};
use crate::assignment::domain::{AssignmentResult, BatchSummary, SkipReason};
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
    /// Adds every student as a collaborator of their repository.
    ///
    /// # Errors
    ///
    /// Returns [`crate::assignment::domain::AssignmentError::Aborted`] when
    /// the operator aborts and any forge failure other than a missing
    /// repository.
    pub async fn grant(&self, batch: &BatchOptions) -> AssignmentResult<BatchSummary> {
        let repos = self.targets(batch, false)?;
        let mut policy = self.policy("grant", batch);
        let mut summary = BatchSummary::default();

        for repo in &repos {
            if self.hosted_or_skip(repo, &mut summary).await?.is_none() {
                continue;
            }
            if policy.must_skip(repo.name())? {
                summary.skipped(repo.name(), SkipReason::Declined);
                continue;
            }

            for student in repo.students() {
                info!(repository = %repo.name(), student = student.username(), "adding collaborator");
                self.forge
                    .add_collaborator(repo.name(), student.username())
                    .await?;
            }
            summary.acted(repo.name());
        }
        Ok(summary)
    }

    /// Withdraws pending student invitations, then removes the students as
    /// collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::assignment::domain::AssignmentError::Aborted`] when
    /// the operator aborts and any forge failure other than a missing
    /// repository.
    pub async fn remove_grant(&self, batch: &BatchOptions) -> AssignmentResult<BatchSummary> {
        let repos = self.targets(batch, false)?;
        let mut policy = self.policy("remove grant", batch);
        let mut summary = BatchSummary::default();

        for repo in &repos {
            if self.hosted_or_skip(repo, &mut summary).await?.is_none() {
                continue;
            }
            if policy.must_skip(repo.name())? {
                summary.skipped(repo.name(), SkipReason::Declined);
                continue;
            }

            for invitation in self.forge.list_invitations(repo.name()).await? {
                let Some(invitee) = invitation.invitee.as_deref() else {
                    continue;
                };
                if repo.has_student(invitee) {
                    info!(repository = %repo.name(), student = invitee, "removing invitation");
                    self.forge
                        .delete_invitation(repo.name(), invitation.id)
                        .await?;
                }
            }
            for student in repo.students() {
                info!(repository = %repo.name(), student = student.username(), "removing collaborator");
                self.forge
                    .remove_collaborator(repo.name(), student.username())
                    .await?;
            }
            summary.acted(repo.name());
        }
        Ok(summary)
    }
}
