//! Values exposed to templates.

use crate::roster::domain::{GroupName, Mentor, Student, StudentRepo};
use serde::Serialize;

/// Placeholders available while rendering for one repository.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RepoContext<'a> {
    /// Clone URL of the target repository.
    pub clone_url: &'a str,
    /// Group of the repository, if the roster is grouped.
    pub group: Option<&'a GroupName>,
    /// Students of the repository in roster order.
    pub students: &'a [Student],
    /// Mentors of the repository in roster order.
    pub mentors: &'a [Mentor],
}

impl<'a> RepoContext<'a> {
    /// Builds the context for `repo` reachable at `clone_url`.
    #[must_use]
    pub fn new(clone_url: &'a str, repo: &'a StudentRepo) -> Self {
        Self {
            clone_url,
            group: repo.group(),
            students: repo.students(),
            mentors: repo.mentors(),
        }
    }
}
