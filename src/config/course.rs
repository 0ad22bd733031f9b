//! Course configuration file model.

use super::{ConfigError, ConfigResult};
use crate::forge::adapters::github::GITHUB_API_URL;
use crate::operator::domain::GroupExpectation;
use crate::roster::adapters::{CsvRoster, PersonSource};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;

/// Configuration file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "classforge.yaml";

/// REST endpoint used when the configuration does not name one.
pub const DEFAULT_API_URL: &str = GITHUB_API_URL;

const fn default_group_count() -> usize {
    1
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

/// Parsed course configuration.
///
/// Relative paths are resolved against the directory holding the
/// configuration file when loaded through [`CourseConfig::load`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseConfig {
    /// Organisation URL, e.g. `https://github.com/acme-course`.
    pub url: String,
    /// Forge REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Default local checkout used by `--source` options.
    #[serde(default)]
    pub source: Option<Utf8PathBuf>,
    /// Expected number of students per repository; `0` means any.
    #[serde(default = "default_group_count")]
    pub expected_group_count: usize,
    /// Expected number of mentors per repository; `0` or absent means any.
    #[serde(default)]
    pub expected_mentor_count: Option<usize>,
    /// Student roster file.
    pub students: PersonSource,
    /// Mentor roster file.
    #[serde(default)]
    pub mentors: Option<PersonSource>,
}

impl CourseConfig {
    /// Loads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, unreadable or not a
    /// valid course description.
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::NotFound(path.to_owned()))?;
        let base = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let read_error = |err: std::io::Error| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_owned())
            } else {
                ConfigError::Read {
                    path: path.to_owned(),
                    source: Arc::new(err),
                }
            }
        };
        let dir = Dir::open_ambient_dir(base, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Ok(Self::parse(path, &contents)?.relative_to(base))
    }

    /// Parses configuration text; `path` is only used for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a valid course
    /// description.
    pub fn parse(path: &Utf8Path, contents: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(contents).map_err(|err| ConfigError::Parse {
            path: path.to_owned(),
            source: Arc::new(err),
        })
    }

    fn relative_to(self, base: &Utf8Path) -> Self {
        let resolve = |path: Utf8PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Self {
            source: self.source.map(resolve),
            students: self.students.relative_to(base),
            mentors: self.mentors.as_ref().map(|mentors| mentors.relative_to(base)),
            ..self
        }
    }

    /// Returns the organisation login: the last path segment of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when `url` cannot be parsed or
    /// has no path segment.
    pub fn organisation(&self) -> ConfigResult<String> {
        let parsed = Url::parse(&self.url).map_err(|_| ConfigError::InvalidUrl(self.url.clone()))?;
        parsed
            .path_segments()
            .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
            .map(str::to_owned)
            .ok_or_else(|| ConfigError::InvalidUrl(self.url.clone()))
    }

    /// Returns the group-size expectation used by the eligibility filter.
    #[must_use]
    pub fn expectation(&self) -> GroupExpectation {
        GroupExpectation::new(
            self.expected_group_count,
            self.expected_mentor_count.filter(|count| *count > 0),
        )
    }

    /// Builds the CSV roster provider described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when the organisation cannot be
    /// derived from `url`.
    pub fn roster(&self) -> ConfigResult<CsvRoster> {
        Ok(CsvRoster::new(
            self.organisation()?,
            self.students.clone(),
            self.mentors.clone(),
        ))
    }
}
