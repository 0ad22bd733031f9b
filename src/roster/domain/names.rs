//! Validated names used to key groups and repositories.

use super::RosterDomainError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical group identifier.
///
/// Group labels coming from spreadsheets are free-form ("Group 1",
/// "group_1 "); they are canonicalised to lower-case ASCII with every run of
/// other characters collapsed into a single `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupName(String);

impl GroupName {
    /// Canonicalises a raw group label.
    ///
    /// Returns `None` when the raw label is empty.
    #[must_use]
    pub fn canonicalize(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let mut canonical = String::with_capacity(raw.len());
        let mut in_separator_run = false;
        for ch in raw.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                canonical.push(ch);
                in_separator_run = false;
            } else if !in_separator_run {
                canonical.push('-');
                in_separator_run = true;
            }
        }
        Some(Self(canonical))
    }

    /// Returns the canonical group name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for GroupName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Name of a repository inside the course organisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoName(String);

impl RepoName {
    /// Creates a validated repository name.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::InvalidRepoName`] when the trimmed value
    /// is empty or contains whitespace or a `/`.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid = !normalized.is_empty()
            && !normalized
                .chars()
                .any(|ch| ch.is_whitespace() || ch == '/');
        if !is_valid {
            return Err(RosterDomainError::InvalidRepoName(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the repository name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RepoName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
