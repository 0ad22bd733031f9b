//! Operator-supplied roster filters.

/// Restricts a roster to explicit usernames and/or groups.
///
/// Empty lists mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSelection {
    usernames: Vec<String>,
    groups: Vec<String>,
}

impl RosterSelection {
    /// Creates a selection that keeps the whole roster.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a selection from the comma-separated lists accepted on the
    /// command line.
    #[must_use]
    pub fn from_lists(usernames: Option<&str>, groups: Option<&str>) -> Self {
        Self {
            usernames: split_list(usernames),
            groups: split_list(groups),
        }
    }

    /// Restricts the selection to the given usernames.
    #[must_use]
    pub fn with_usernames(mut self, usernames: impl IntoIterator<Item = String>) -> Self {
        self.usernames = usernames.into_iter().collect();
        self
    }

    /// Restricts the selection to the given raw group labels.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = String>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Returns the requested usernames.
    #[must_use]
    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    /// Returns the requested raw group labels.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Returns `true` when `username` passes the username filter.
    #[must_use]
    pub fn admits_username(&self, username: &str) -> bool {
        self.usernames.is_empty() || self.usernames.iter().any(|wanted| wanted == username)
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
