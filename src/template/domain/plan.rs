//! Issue and milestone records seeded by `create-issues`.

use super::{IssuePlanError, IssuePlanResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// One record of an issue plan, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IssueTemplate {
    /// Creates a milestone.
    Milestone(MilestoneEntry),
    /// Creates an issue.
    Issue(IssueEntry),
}

/// Milestone record. Only the title is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MilestoneEntry {
    /// Title template.
    pub title: String,
    /// Description, used verbatim.
    #[serde(default)]
    pub description: Option<String>,
    /// Due date.
    #[serde(
        default,
        rename = "due date",
        alias = "due_on",
        deserialize_with = "deserialize_due_date"
    )]
    pub due_on: Option<DateTime<Utc>>,
}

/// Issue record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueEntry {
    /// Title template.
    pub title: String,
    /// Body template.
    #[serde(default)]
    pub body: String,
    /// Title of the milestone the issue belongs to.
    #[serde(default)]
    pub milestone: Option<String>,
    /// Labels, used verbatim.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Assignee templates.
    #[serde(default)]
    pub assignees: Vec<String>,
}

/// A non-empty ordered list of issue plan records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePlan {
    entries: Vec<IssueTemplate>,
}

impl IssuePlan {
    /// Parses a YAML sequence of records.
    ///
    /// # Errors
    ///
    /// Returns [`IssuePlanError::Parse`] for malformed YAML or unknown record
    /// types and [`IssuePlanError::Empty`] for an empty sequence.
    pub fn parse(yaml: &str) -> IssuePlanResult<Self> {
        let entries: Vec<IssueTemplate> =
            serde_yaml::from_str(yaml).map_err(|err| IssuePlanError::Parse(Arc::new(err)))?;
        Self::new(entries)
    }

    /// Wraps already parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`IssuePlanError::Empty`] when `entries` is empty.
    pub fn new(entries: Vec<IssueTemplate>) -> IssuePlanResult<Self> {
        if entries.is_empty() {
            return Err(IssuePlanError::Empty);
        }
        Ok(Self { entries })
    }

    /// Returns the records in file order.
    #[must_use]
    pub fn entries(&self) -> &[IssueTemplate] {
        &self.entries
    }
}

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
///
/// # Errors
///
/// Returns a description of the accepted formats when neither matches.
pub fn parse_due_date(text: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = text.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|stamp| stamp.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|_| format!("invalid due date {trimmed:?}: expected RFC 3339 or YYYY-MM-DD"))
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| parse_due_date(&text).map_err(serde::de::Error::custom))
        .transpose()
}
