//! Workflow orchestration.

mod access;
mod create_repos;
mod issues;
mod pull_requests;
mod requests;
mod service;
mod status;

pub use requests::{
    BatchOptions, CreateIssuesRequest, CreateReposRequest, PullRequestUpdate, StatusRequest,
};
pub use service::{AssignmentService, MASTER_BRANCH};
