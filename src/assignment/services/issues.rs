//! `create-issues`: seed milestones and issues from an issue plan.

use super::{AssignmentService, CreateIssuesRequest};
use crate::assignment::domain::{AssignmentError, AssignmentResult, BatchSummary, SkipReason};
use crate::forge::domain::{NewIssue, NewMilestone};
use crate::forge::ports::{Forge, ForgeError};
use crate::operator::ports::OperatorPrompt;
use crate::roster::domain::RepoName;
use crate::roster::ports::RosterProvider;
use crate::template::domain::{IssueEntry, IssueTemplate, MilestoneEntry, RepoContext};
use crate::template::services::render_text;
use crate::vcs::ports::VersionControl;
use mockable::Clock;
use tracing::{debug, info};

impl<R, F, V, P, C> AssignmentService<R, F, V, P, C>
where
    R: RosterProvider,
    F: Forge,
    V: VersionControl,
    P: OperatorPrompt,
    C: Clock + Send + Sync,
{
    /// Creates the plan's milestones and issues, in plan order, in every
    /// selected repository.
    ///
    /// Templates are rendered with the repository's SSH URL as `clone_url`.
    /// A milestone whose title already exists is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::MilestoneNotFound`] when an issue names a
    /// milestone the repository lacks, [`AssignmentError::Aborted`] when the
    /// operator aborts, and any other forge or template failure.
    pub async fn create_issues(&self, request: &CreateIssuesRequest) -> AssignmentResult<BatchSummary> {
        let repos = self.targets(&request.batch, true)?;
        let mut policy = self.policy("create the issue(s)", &request.batch);
        let mut summary = BatchSummary::default();

        for repo in &repos {
            let Some(hosted) = self.hosted_or_skip(repo, &mut summary).await? else {
                continue;
            };
            if policy.must_skip(repo.name())? {
                summary.skipped(repo.name(), SkipReason::Declined);
                continue;
            }

            info!(repository = %repo.name(), "generating issues");
            let context = RepoContext::new(&hosted.ssh_url, repo);
            for entry in request.plan.entries() {
                match entry {
                    IssueTemplate::Milestone(milestone) => {
                        self.seed_milestone(repo.name(), milestone, &context).await?;
                    }
                    IssueTemplate::Issue(issue) => {
                        self.seed_issue(repo.name(), issue, &context).await?;
                    }
                }
            }
            summary.acted(repo.name());
        }
        Ok(summary)
    }

    async fn seed_milestone(
        &self,
        repo: &RepoName,
        entry: &MilestoneEntry,
        context: &RepoContext<'_>,
    ) -> AssignmentResult<()> {
        let milestone = NewMilestone {
            title: render_text(&entry.title, context)?,
            description: entry.description.clone(),
            due_on: entry.due_on,
        };
        match self.forge.create_milestone(repo, &milestone).await {
            Ok(created) => {
                debug!(repository = %repo, title = %created.title, "created milestone");
                Ok(())
            }
            Err(ForgeError::AlreadyExists(_)) => {
                debug!(repository = %repo, title = %milestone.title, "milestone already exists");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn seed_issue(
        &self,
        repo: &RepoName,
        entry: &IssueEntry,
        context: &RepoContext<'_>,
    ) -> AssignmentResult<()> {
        info!(repository = %repo, title = %entry.title, "adding issue");
        let milestone = match &entry.milestone {
            Some(title) => Some(self.milestone_number(repo, title).await?),
            None => None,
        };
        let assignees = entry
            .assignees
            .iter()
            .map(|assignee| render_text(assignee, context))
            .collect::<Result<Vec<_>, _>>()?;
        let issue = NewIssue {
            title: render_text(&entry.title, context)?,
            body: render_text(&entry.body, context)?,
            milestone,
            labels: entry.labels.clone(),
            assignees,
        };
        self.forge.create_issue(repo, &issue).await?;
        Ok(())
    }

    /// First milestone in forge order whose title matches.
    async fn milestone_number(&self, repo: &RepoName, title: &str) -> AssignmentResult<u64> {
        self.forge
            .list_milestones(repo)
            .await?
            .into_iter()
            .find(|milestone| milestone.title == title)
            .map(|milestone| milestone.number)
            .ok_or_else(|| AssignmentError::MilestoneNotFound {
                repo: repo.clone(),
                title: title.to_owned(),
            })
    }
}
