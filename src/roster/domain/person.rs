//! Students and mentors as listed in the course roster.

use super::{GroupName, RosterDomainError};
use serde::Serialize;
use std::collections::BTreeMap;

/// A roster entry: one forge account with its roster metadata.
///
/// Serialises with the field names templates refer to (`username`,
/// `comment`, `group`, `groups`, `record`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    username: String,
    comment: String,
    group: Option<GroupName>,
    groups: Vec<GroupName>,
    record: BTreeMap<String, String>,
}

/// Roster entry for someone working in a group repository.
pub type Student = Person;

/// Roster entry for someone supervising one or more groups.
pub type Mentor = Person;

impl Person {
    /// Creates a roster entry for the given forge username.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyUsername`] when the username is
    /// empty after trimming.
    pub fn new(username: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = username.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RosterDomainError::EmptyUsername);
        }
        Ok(Self {
            username: normalized.to_owned(),
            comment: String::new(),
            group: None,
            groups: Vec::new(),
            record: BTreeMap::new(),
        })
    }

    /// Sets the free-form comment shown next to the username.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the group the person works in.
    #[must_use]
    pub fn with_group(mut self, group: Option<GroupName>) -> Self {
        self.group = group;
        self
    }

    /// Sets the groups the person supervises.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = GroupName>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Sets the raw roster record the person was read from.
    #[must_use]
    pub fn with_record(mut self, record: BTreeMap<String, String>) -> Self {
        self.record = record;
        self
    }

    /// Returns the forge username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the roster comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the group the person works in.
    #[must_use]
    pub const fn group(&self) -> Option<&GroupName> {
        self.group.as_ref()
    }

    /// Returns the groups the person supervises.
    #[must_use]
    pub fn groups(&self) -> &[GroupName] {
        &self.groups
    }

    /// Returns the raw roster record.
    #[must_use]
    pub const fn record(&self) -> &BTreeMap<String, String> {
        &self.record
    }

    /// Returns `true` when the person supervises `group`.
    #[must_use]
    pub fn supervises(&self, group: &GroupName) -> bool {
        self.groups.contains(group)
    }
}
