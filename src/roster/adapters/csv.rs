//! Roster provider backed by spreadsheet exports.
//!
//! Students (and optionally mentors) are read from CSV files whose columns
//! are mapped onto roster fields by a [`FieldMapping`]. Students sharing a
//! group share a repository named `<organisation>-<group>`; without a group
//! column every student gets a repository named `<organisation>-<username>`.

use crate::roster::{
    domain::{GroupName, Mentor, Person, RepoName, RosterSelection, Student, StudentRepo},
    ports::{RosterError, RosterProvider, RosterResult},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use minijinja::{Environment, context};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Maps roster fields onto CSV column names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldMapping {
    /// Column holding the forge username.
    pub username: String,
    /// Template rendered with `record` (the CSV row) to build the comment.
    pub comment: String,
    /// Column holding the group a student works in.
    #[serde(default)]
    pub group: Option<String>,
    /// Column holding the comma-separated groups a mentor supervises.
    #[serde(default)]
    pub groups: Option<String>,
}

/// A CSV file and its column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonSource {
    /// Path to the CSV file.
    pub source: Utf8PathBuf,
    /// Column mapping for the file.
    #[serde(rename = "field-mapping")]
    pub field_mapping: FieldMapping,
}

impl PersonSource {
    /// Returns a copy whose relative path is resolved against `base`.
    #[must_use]
    pub fn relative_to(&self, base: &Utf8Path) -> Self {
        let source = if self.source.is_absolute() {
            self.source.clone()
        } else {
            base.join(&self.source)
        };
        Self {
            source,
            field_mapping: self.field_mapping.clone(),
        }
    }
}

/// CSV-backed roster provider.
#[derive(Debug, Clone)]
pub struct CsvRoster {
    organisation: String,
    students: PersonSource,
    mentors: Option<PersonSource>,
}

impl CsvRoster {
    /// Creates a provider for the given organisation and roster files.
    #[must_use]
    pub const fn new(
        organisation: String,
        students: PersonSource,
        mentors: Option<PersonSource>,
    ) -> Self {
        Self {
            organisation,
            students,
            mentors,
        }
    }

    fn repo_name_for(&self, suffix: &str) -> RosterResult<RepoName> {
        Ok(RepoName::new(format!("{}-{suffix}", self.organisation))?)
    }
}

impl RosterProvider for CsvRoster {
    fn resolve(&self, selection: &RosterSelection) -> RosterResult<Vec<StudentRepo>> {
        let group_column = self.students.field_mapping.group.is_some();
        let wanted_groups: Vec<GroupName> = selection
            .groups()
            .iter()
            .filter_map(|raw| GroupName::canonicalize(raw))
            .collect();

        let students: Vec<Student> = read_people(&self.students)?
            .into_iter()
            .filter(|person| selection.admits_username(person.username()))
            .filter(|person| {
                !group_column
                    || wanted_groups.is_empty()
                    || person
                        .group()
                        .is_some_and(|group| wanted_groups.contains(group))
            })
            .collect();
        let mentors = match &self.mentors {
            Some(source) => read_people(source)?,
            None => Vec::new(),
        };
        debug!(
            students = students.len(),
            mentors = mentors.len(),
            "resolving repositories"
        );

        let mut buckets: Vec<(RepoName, Option<GroupName>, Vec<Student>)> = Vec::new();
        for student in students {
            let (name, group) = if group_column {
                let Some(group) = student.group().cloned() else {
                    info!(
                        username = student.username(),
                        "student is not a member of any group; skipping"
                    );
                    continue;
                };
                (self.repo_name_for(group.as_str())?, Some(group))
            } else {
                (self.repo_name_for(student.username())?, None)
            };
            match buckets.iter_mut().find(|(existing, _, _)| *existing == name) {
                Some((_, _, members)) => members.push(student),
                None => buckets.push((name, group, vec![student])),
            }
        }

        Ok(buckets
            .into_iter()
            .map(|(name, group, members)| assemble_repo(name, group, members, &mentors))
            .collect())
    }
}

fn assemble_repo(
    name: RepoName,
    group: Option<GroupName>,
    students: Vec<Student>,
    mentors: &[Mentor],
) -> StudentRepo {
    let comment = students
        .iter()
        .map(Person::comment)
        .collect::<Vec<_>>()
        .join(", ");
    let repo_mentors: Vec<Mentor> = group
        .as_ref()
        .map(|wanted| {
            mentors
                .iter()
                .filter(|mentor| mentor.supervises(wanted))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    StudentRepo::new(name, group)
        .with_students(students)
        .with_mentors(repo_mentors)
        .with_comment(comment)
}

fn read_people(source: &PersonSource) -> RosterResult<Vec<Person>> {
    let contents = read_source(&source.source)?;
    let mapping = &source.field_mapping;
    let environment = Environment::new();
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let headers = reader
        .headers()
        .map_err(|err| RosterError::read(source.source.clone(), err))?
        .clone();

    let mut people = Vec::new();
    for row in reader.records() {
        let fields = row.map_err(|err| RosterError::read(source.source.clone(), err))?;
        // Ragged rows: extra cells are dropped, missing ones read as empty.
        let record: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                (
                    header.to_owned(),
                    fields.get(index).unwrap_or_default().to_owned(),
                )
            })
            .collect();
        people.push(person_from_record(&environment, source, mapping, record)?);
    }
    Ok(people)
}

fn person_from_record(
    environment: &Environment<'_>,
    source: &PersonSource,
    mapping: &FieldMapping,
    record: BTreeMap<String, String>,
) -> RosterResult<Person> {
    let raw_username = column(source, &record, &mapping.username)?;
    let username = raw_username.trim_matches('#').to_owned();
    let comment = environment
        .render_str(&mapping.comment, context! { record => &record })
        .map_err(|err| RosterError::CommentTemplate {
            username: username.clone(),
            reason: err.to_string(),
        })?;
    let group = match &mapping.group {
        Some(group_column) => GroupName::canonicalize(column(source, &record, group_column)?),
        None => None,
    };
    let groups: Vec<GroupName> = match &mapping.groups {
        Some(groups_column) => column(source, &record, groups_column)?
            .split(',')
            .map(str::trim)
            .filter_map(GroupName::canonicalize)
            .collect(),
        None => Vec::new(),
    };

    Ok(Person::new(username)?
        .with_comment(comment)
        .with_group(group)
        .with_groups(groups)
        .with_record(record))
}

fn column<'a>(
    source: &PersonSource,
    record: &'a BTreeMap<String, String>,
    name: &str,
) -> RosterResult<&'a str> {
    record
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| RosterError::MissingColumn {
            path: source.source.clone(),
            column: name.to_owned(),
        })
}

fn read_source(path: &Utf8Path) -> RosterResult<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| RosterError::SourceNotFound(path.to_owned()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let not_found = |err: std::io::Error| {
        if err.kind() == std::io::ErrorKind::NotFound {
            RosterError::SourceNotFound(path.to_owned())
        } else {
            RosterError::read(path, err)
        }
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(not_found)?;
    dir.read_to_string(file_name).map_err(not_found)
}
