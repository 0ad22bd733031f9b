//! Records exchanged with the forge.

mod repository;
mod requests;

pub use repository::{ForgeRepository, Invitation, Milestone, PullRequest};
pub use requests::{NewIssue, NewMilestone, NewPullRequest};
