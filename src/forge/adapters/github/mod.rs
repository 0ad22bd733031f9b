//! GitHub REST API implementation of the forge port.

mod models;

use self::models::{
    ApiErrorBody, BranchProtectionRequest, CreateIssueRequest, CreateMilestoneRequest,
    CreatePullRequest, CreateRepositoryRequest, EditRepositoryRequest, InvitationRecord,
    MilestoneRecord, NumberedRecord, RepositoryRecord,
};
use crate::forge::domain::{
    ForgeRepository, Invitation, Milestone, NewIssue, NewMilestone, NewPullRequest, PullRequest,
};
use crate::forge::ports::{Forge, ForgeError, ForgeResult};
use crate::roster::domain::RepoName;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default endpoint of the public GitHub API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const PAGE_SIZE: usize = 100;

/// Forge backed by the GitHub REST API, scoped to one organisation.
#[derive(Debug, Clone)]
pub struct GitHubForge {
    client: reqwest::Client,
    api_url: String,
    organisation: String,
    web_url: String,
    token: String,
}

impl GitHubForge {
    /// Creates a client for `organisation` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        organisation: impl Into<String>,
        token: impl Into<String>,
    ) -> ForgeResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("classforge/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ForgeError::transport)?;

        let org: String = organisation.into();
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            web_url: format!("https://github.com/{org}"),
            organisation: org,
            token: token.into(),
        })
    }

    /// Overrides the organisation web URL shown in operator messages.
    #[must_use]
    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    fn repo_url(&self, repo: &RepoName, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}{tail}",
            self.api_url, self.organisation, repo
        )
    }

    fn repo_subject(&self, repo: &RepoName) -> String {
        format!("repository {}/{}", self.organisation, repo)
    }

    async fn send(&self, request: RequestBuilder, subject: &str) -> ForgeResult<Response> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ForgeError::transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ApiErrorBody = response.json().await.unwrap_or_default();
        debug!(%status, subject, message = %body.message, "forge request rejected");
        Err(match status {
            StatusCode::NOT_FOUND => ForgeError::NotFound(subject.to_owned()),
            StatusCode::UNPROCESSABLE_ENTITY if body.is_single_already_exists() => {
                ForgeError::AlreadyExists(subject.to_owned())
            }
            _ => ForgeError::Api {
                status: status.as_u16(),
                message: body.message,
            },
        })
    }

    async fn get_all<T: DeserializeOwned>(&self, url: &str, subject: &str) -> ForgeResult<Vec<T>> {
        let mut items = Vec::new();
        let mut page: usize = 1;
        loop {
            let request = self
                .client
                .get(url)
                .query(&[("per_page", PAGE_SIZE), ("page", page)]);
            let batch: Vec<T> = read_json(self.send(request, subject).await?).await?;
            let exhausted = batch.len() < PAGE_SIZE;
            items.extend(batch);
            if exhausted {
                return Ok(items);
            }
            page = page.saturating_add(1);
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ForgeResult<T> {
    response.json().await.map_err(ForgeError::transport)
}

#[async_trait]
impl Forge for GitHubForge {
    fn organisation_url(&self) -> String {
        self.web_url.clone()
    }

    async fn get_repository(&self, name: &RepoName) -> ForgeResult<ForgeRepository> {
        let request = self.client.get(self.repo_url(name, ""));
        let record: RepositoryRecord =
            read_json(self.send(request, &self.repo_subject(name)).await?).await?;
        record.into_domain()
    }

    async fn create_repository(
        &self,
        name: &RepoName,
        private: bool,
    ) -> ForgeResult<ForgeRepository> {
        let subject = self.repo_subject(name);
        let url = format!("{}/orgs/{}/repos", self.api_url, self.organisation);
        let request = self.client.post(url).json(&CreateRepositoryRequest {
            name: name.as_str(),
            private,
        });
        debug!(repo = %name, "creating repository");
        let response = match self.send(request, &subject).await {
            Ok(response) => response,
            // GitHub reports a taken name as a generic validation failure.
            Err(ForgeError::Api { status: 422, .. }) => {
                return Err(ForgeError::AlreadyExists(subject));
            }
            Err(err) => return Err(err),
        };
        let record: RepositoryRecord = read_json(response).await?;
        record.into_domain()
    }

    async fn protect_branch(&self, repo: &RepoName, branch: &str) -> ForgeResult<()> {
        let url = self.repo_url(repo, &format!("/branches/{branch}/protection"));
        let request = self
            .client
            .put(url)
            .json(&BranchProtectionRequest::locked());
        self.send(request, &format!("branch {branch} of {}", self.repo_subject(repo)))
            .await?;
        Ok(())
    }

    async fn set_description(&self, repo: &RepoName, description: &str) -> ForgeResult<()> {
        let request = self
            .client
            .patch(self.repo_url(repo, ""))
            .json(&EditRepositoryRequest { description });
        self.send(request, &self.repo_subject(repo)).await?;
        Ok(())
    }

    async fn create_pull_request(
        &self,
        repo: &RepoName,
        request: &NewPullRequest,
    ) -> ForgeResult<PullRequest> {
        let http = self
            .client
            .post(self.repo_url(repo, "/pulls"))
            .json(&CreatePullRequest {
                title: &request.title,
                body: &request.body,
                head: &request.head,
                base: &request.base,
            });
        let subject = format!("pull request {} in {}", request.head, self.repo_subject(repo));
        let record: NumberedRecord = read_json(self.send(http, &subject).await?).await?;
        Ok(PullRequest {
            number: record.number,
            html_url: record.html_url,
        })
    }

    async fn create_milestone(
        &self,
        repo: &RepoName,
        request: &NewMilestone,
    ) -> ForgeResult<Milestone> {
        let http = self
            .client
            .post(self.repo_url(repo, "/milestones"))
            .json(&CreateMilestoneRequest::from(request));
        let subject = format!("milestone {:?}", request.title);
        let record: MilestoneRecord = read_json(self.send(http, &subject).await?).await?;
        Ok(record.into())
    }

    async fn list_milestones(&self, repo: &RepoName) -> ForgeResult<Vec<Milestone>> {
        let url = self.repo_url(repo, "/milestones");
        let records: Vec<MilestoneRecord> =
            self.get_all(&url, &self.repo_subject(repo)).await?;
        Ok(records.into_iter().map(Milestone::from).collect())
    }

    async fn create_issue(&self, repo: &RepoName, request: &NewIssue) -> ForgeResult<u64> {
        let http = self
            .client
            .post(self.repo_url(repo, "/issues"))
            .json(&CreateIssueRequest::from(request));
        let subject = format!("issue {:?}", request.title);
        let record: NumberedRecord = read_json(self.send(http, &subject).await?).await?;
        Ok(record.number)
    }

    async fn add_collaborator(&self, repo: &RepoName, username: &str) -> ForgeResult<()> {
        let request = self
            .client
            .put(self.repo_url(repo, &format!("/collaborators/{username}")));
        self.send(request, &format!("user {username}")).await?;
        Ok(())
    }

    async fn remove_collaborator(&self, repo: &RepoName, username: &str) -> ForgeResult<()> {
        let request = self
            .client
            .delete(self.repo_url(repo, &format!("/collaborators/{username}")));
        self.send(request, &format!("user {username}")).await?;
        Ok(())
    }

    async fn list_invitations(&self, repo: &RepoName) -> ForgeResult<Vec<Invitation>> {
        let url = self.repo_url(repo, "/invitations");
        let records: Vec<InvitationRecord> =
            self.get_all(&url, &self.repo_subject(repo)).await?;
        Ok(records.into_iter().map(Invitation::from).collect())
    }

    async fn delete_invitation(&self, repo: &RepoName, invitation_id: u64) -> ForgeResult<()> {
        let request = self
            .client
            .delete(self.repo_url(repo, &format!("/invitations/{invitation_id}")));
        self.send(request, &format!("invitation {invitation_id}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
