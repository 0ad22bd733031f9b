//! In-memory roster provider for tests and scripted runs.

use crate::roster::{
    domain::{GroupName, RosterSelection, StudentRepo},
    ports::{RosterProvider, RosterResult},
};

/// Roster provider over a fixed list of repositories.
///
/// Selections are applied member-wise: students outside the selection are
/// dropped and repositories left without students disappear.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    repos: Vec<StudentRepo>,
}

impl InMemoryRoster {
    /// Creates a provider over `repos`, preserving their order.
    #[must_use]
    pub fn new(repos: impl IntoIterator<Item = StudentRepo>) -> Self {
        Self {
            repos: repos.into_iter().collect(),
        }
    }
}

impl RosterProvider for InMemoryRoster {
    fn resolve(&self, selection: &RosterSelection) -> RosterResult<Vec<StudentRepo>> {
        let wanted_groups: Vec<GroupName> = selection
            .groups()
            .iter()
            .filter_map(|raw| GroupName::canonicalize(raw))
            .collect();
        let admits_group = |repo: &StudentRepo| {
            wanted_groups.is_empty()
                || repo
                    .group()
                    .is_some_and(|group| wanted_groups.contains(group))
        };

        Ok(self
            .repos
            .iter()
            .filter(|repo| admits_group(*repo))
            .filter_map(|repo| {
                let students: Vec<_> = repo
                    .students()
                    .iter()
                    .filter(|student| selection.admits_username(student.username()))
                    .cloned()
                    .collect();
                (!students.is_empty()).then(|| repo.clone().with_students(students))
            })
            .collect())
    }
}
