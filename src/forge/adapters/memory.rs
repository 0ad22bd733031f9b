//! In-memory forge for workflow tests.
//!
//! Mirrors the forge semantics the workflows rely on: missing repositories
//! are `NotFound`, duplicate repositories and milestone titles are
//! `AlreadyExists`. Every mutating call is appended to an event log so tests
//! can assert on ordering.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::forge::domain::{
    ForgeRepository, Invitation, Milestone, NewIssue, NewMilestone, NewPullRequest, PullRequest,
};
use crate::forge::ports::{Forge, ForgeError, ForgeResult};
use crate::roster::domain::RepoName;

/// A mutating call observed by [`InMemoryForge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgeEvent {
    /// A repository was created.
    RepositoryCreated(RepoName),
    /// A branch was protected.
    BranchProtected {
        /// Repository name.
        repo: RepoName,
        /// Protected branch.
        branch: String,
    },
    /// A repository description was replaced.
    DescriptionSet {
        /// Repository name.
        repo: RepoName,
        /// New description.
        description: String,
    },
    /// A pull request was opened.
    PullRequestOpened {
        /// Repository name.
        repo: RepoName,
        /// Head branch.
        head: String,
    },
    /// A milestone was created.
    MilestoneCreated {
        /// Repository name.
        repo: RepoName,
        /// Milestone title.
        title: String,
    },
    /// An issue was created.
    IssueCreated {
        /// Repository name.
        repo: RepoName,
        /// Issue title.
        title: String,
    },
    /// A collaborator was added.
    CollaboratorAdded {
        /// Repository name.
        repo: RepoName,
        /// Username.
        username: String,
    },
    /// A collaborator was removed.
    CollaboratorRemoved {
        /// Repository name.
        repo: RepoName,
        /// Username.
        username: String,
    },
    /// A pending invitation was withdrawn.
    InvitationDeleted {
        /// Repository name.
        repo: RepoName,
        /// Invitation identifier.
        id: u64,
    },
}

/// Thread-safe in-memory forge.
#[derive(Debug, Clone)]
pub struct InMemoryForge {
    organisation: String,
    remote_base: String,
    state: Arc<RwLock<ForgeState>>,
}

#[derive(Debug, Default)]
struct ForgeState {
    repos: HashMap<RepoName, HostedRepo>,
    events: Vec<ForgeEvent>,
    next_id: u64,
}

impl ForgeState {
    fn allocate_id(&mut self) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }

    fn repo_mut(&mut self, name: &RepoName) -> ForgeResult<&mut HostedRepo> {
        self.repos
            .get_mut(name)
            .ok_or_else(|| ForgeError::NotFound(format!("repository {name}")))
    }
}

#[derive(Debug)]
struct HostedRepo {
    info: ForgeRepository,
    protected: Vec<String>,
    pulls: Vec<NewPullRequest>,
    milestones: Vec<Milestone>,
    issues: Vec<NewIssue>,
    collaborators: Vec<String>,
    invitations: Vec<Invitation>,
}

impl InMemoryForge {
    /// Creates an empty forge for `organisation`.
    #[must_use]
    pub fn new(organisation: impl Into<String>) -> Self {
        let org: String = organisation.into();
        Self {
            remote_base: format!("git@forge.test:{org}"),
            organisation: org,
            state: Arc::default(),
        }
    }

    /// Uses `base` as the prefix of every repository's SSH URL.
    ///
    /// Pointing it at a directory of bare repositories lets real `git`
    /// pushes and fetches run against local remotes.
    #[must_use]
    pub fn with_remote_base(mut self, base: impl Into<String>) -> Self {
        self.remote_base = base.into();
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, ForgeState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ForgeState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn hosted(&self, name: &RepoName) -> HostedRepo {
        HostedRepo {
            info: ForgeRepository {
                name: name.clone(),
                clone_url: format!("https://forge.test/{}/{name}.git", self.organisation),
                ssh_url: format!("{}/{name}.git", self.remote_base),
                html_url: format!("https://forge.test/{}/{name}", self.organisation),
                description: None,
            },
            protected: Vec::new(),
            pulls: Vec::new(),
            milestones: Vec::new(),
            issues: Vec::new(),
            collaborators: Vec::new(),
            invitations: Vec::new(),
        }
    }

    /// Seeds an existing repository without recording an event.
    pub fn seed_repository(&self, name: &RepoName) {
        let hosted = self.hosted(name);
        self.write().repos.insert(name.clone(), hosted);
    }

    /// Seeds a pending invitation and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::NotFound`] if the repository was never seeded.
    pub fn seed_invitation(&self, repo: &RepoName, invitee: &str) -> ForgeResult<u64> {
        let mut state = self.write();
        let id = state.allocate_id();
        state.repo_mut(repo)?.invitations.push(Invitation {
            id,
            invitee: Some(invitee.to_owned()),
        });
        Ok(id)
    }

    /// Returns every recorded event in call order.
    #[must_use]
    pub fn events(&self) -> Vec<ForgeEvent> {
        self.read().events.clone()
    }

    /// Returns the repository record, if hosted.
    #[must_use]
    pub fn repository(&self, name: &RepoName) -> Option<ForgeRepository> {
        self.read().repos.get(name).map(|hosted| hosted.info.clone())
    }

    /// Returns the milestones of a repository in creation order.
    #[must_use]
    pub fn milestones(&self, name: &RepoName) -> Vec<Milestone> {
        self.inspect(name, |hosted| hosted.milestones.clone())
    }

    /// Returns the issues of a repository in creation order.
    #[must_use]
    pub fn issues(&self, name: &RepoName) -> Vec<NewIssue> {
        self.inspect(name, |hosted| hosted.issues.clone())
    }

    /// Returns the pull requests opened on a repository.
    #[must_use]
    pub fn pull_requests(&self, name: &RepoName) -> Vec<NewPullRequest> {
        self.inspect(name, |hosted| hosted.pulls.clone())
    }

    /// Returns the current collaborators of a repository.
    #[must_use]
    pub fn collaborators(&self, name: &RepoName) -> Vec<String> {
        self.inspect(name, |hosted| hosted.collaborators.clone())
    }

    /// Returns the protected branches of a repository.
    #[must_use]
    pub fn protected_branches(&self, name: &RepoName) -> Vec<String> {
        self.inspect(name, |hosted| hosted.protected.clone())
    }

    fn inspect<T: Default>(&self, name: &RepoName, view: impl FnOnce(&HostedRepo) -> T) -> T {
        self.read().repos.get(name).map(view).unwrap_or_default()
    }
}

#[async_trait]
impl Forge for InMemoryForge {
    fn organisation_url(&self) -> String {
        format!("https://forge.test/{}", self.organisation)
    }

    async fn get_repository(&self, name: &RepoName) -> ForgeResult<ForgeRepository> {
        self.repository(name)
            .ok_or_else(|| ForgeError::NotFound(format!("repository {name}")))
    }

    async fn create_repository(
        &self,
        name: &RepoName,
        _private: bool,
    ) -> ForgeResult<ForgeRepository> {
        let hosted = self.hosted(name);
        let mut state = self.write();
        if state.repos.contains_key(name) {
            return Err(ForgeError::AlreadyExists(format!("repository {name}")));
        }
        let info = hosted.info.clone();
        state.repos.insert(name.clone(), hosted);
        state.events.push(ForgeEvent::RepositoryCreated(name.clone()));
        Ok(info)
    }

    async fn protect_branch(&self, repo: &RepoName, branch: &str) -> ForgeResult<()> {
        let mut state = self.write();
        state.repo_mut(repo)?.protected.push(branch.to_owned());
        state.events.push(ForgeEvent::BranchProtected {
            repo: repo.clone(),
            branch: branch.to_owned(),
        });
        Ok(())
    }

    async fn set_description(&self, repo: &RepoName, description: &str) -> ForgeResult<()> {
        let mut state = self.write();
        state.repo_mut(repo)?.info.description = Some(description.to_owned());
        state.events.push(ForgeEvent::DescriptionSet {
            repo: repo.clone(),
            description: description.to_owned(),
        });
        Ok(())
    }

    async fn create_pull_request(
        &self,
        repo: &RepoName,
        request: &NewPullRequest,
    ) -> ForgeResult<PullRequest> {
        let mut state = self.write();
        let number = state.allocate_id();
        state.repo_mut(repo)?.pulls.push(request.clone());
        state.events.push(ForgeEvent::PullRequestOpened {
            repo: repo.clone(),
            head: request.head.clone(),
        });
        Ok(PullRequest {
            number,
            html_url: format!("https://forge.test/{}/{repo}/pull/{number}", self.organisation),
        })
    }

    async fn create_milestone(
        &self,
        repo: &RepoName,
        request: &NewMilestone,
    ) -> ForgeResult<Milestone> {
        let mut state = self.write();
        let number = state.allocate_id();
        let hosted = state.repo_mut(repo)?;
        if hosted
            .milestones
            .iter()
            .any(|milestone| milestone.title == request.title)
        {
            return Err(ForgeError::AlreadyExists(format!(
                "milestone {:?}",
                request.title
            )));
        }
        let milestone = Milestone {
            number,
            title: request.title.clone(),
        };
        hosted.milestones.push(milestone.clone());
        state.events.push(ForgeEvent::MilestoneCreated {
            repo: repo.clone(),
            title: request.title.clone(),
        });
        Ok(milestone)
    }

    async fn list_milestones(&self, repo: &RepoName) -> ForgeResult<Vec<Milestone>> {
        self.read()
            .repos
            .get(repo)
            .map(|hosted| hosted.milestones.clone())
            .ok_or_else(|| ForgeError::NotFound(format!("repository {repo}")))
    }

    async fn create_issue(&self, repo: &RepoName, request: &NewIssue) -> ForgeResult<u64> {
        let mut state = self.write();
        let number = state.allocate_id();
        let hosted = state.repo_mut(repo)?;
        if let Some(wanted) = request.milestone
            && !hosted.milestones.iter().any(|m| m.number == wanted)
        {
            return Err(ForgeError::Api {
                status: 422,
                message: format!("milestone {wanted} does not exist"),
            });
        }
        hosted.issues.push(request.clone());
        state.events.push(ForgeEvent::IssueCreated {
            repo: repo.clone(),
            title: request.title.clone(),
        });
        Ok(number)
    }

    async fn add_collaborator(&self, repo: &RepoName, username: &str) -> ForgeResult<()> {
        let mut state = self.write();
        let hosted = state.repo_mut(repo)?;
        if !hosted.collaborators.iter().any(|name| name == username) {
            hosted.collaborators.push(username.to_owned());
        }
        state.events.push(ForgeEvent::CollaboratorAdded {
            repo: repo.clone(),
            username: username.to_owned(),
        });
        Ok(())
    }

    async fn remove_collaborator(&self, repo: &RepoName, username: &str) -> ForgeResult<()> {
        let mut state = self.write();
        state
            .repo_mut(repo)?
            .collaborators
            .retain(|name| name != username);
        state.events.push(ForgeEvent::CollaboratorRemoved {
            repo: repo.clone(),
            username: username.to_owned(),
        });
        Ok(())
    }

    async fn list_invitations(&self, repo: &RepoName) -> ForgeResult<Vec<Invitation>> {
        self.read()
            .repos
            .get(repo)
            .map(|hosted| hosted.invitations.clone())
            .ok_or_else(|| ForgeError::NotFound(format!("repository {repo}")))
    }

    async fn delete_invitation(&self, repo: &RepoName, invitation_id: u64) -> ForgeResult<()> {
        let mut state = self.write();
        let hosted = state.repo_mut(repo)?;
        let before = hosted.invitations.len();
        hosted
            .invitations
            .retain(|invitation| invitation.id != invitation_id);
        if hosted.invitations.len() == before {
            return Err(ForgeError::NotFound(format!("invitation {invitation_id}")));
        }
        state.events.push(ForgeEvent::InvitationDeleted {
            repo: repo.clone(),
            id: invitation_id,
        });
        Ok(())
    }
}
