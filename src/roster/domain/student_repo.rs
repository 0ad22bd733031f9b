//! One repository per group, with the people who work in it.

use super::{GroupName, Mentor, RepoName, Student};
use serde::Serialize;

/// A group repository and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRepo {
    name: RepoName,
    group: Option<GroupName>,
    students: Vec<Student>,
    mentors: Vec<Mentor>,
    comment: String,
}

impl StudentRepo {
    /// Creates an empty repository entry.
    #[must_use]
    pub const fn new(name: RepoName, group: Option<GroupName>) -> Self {
        Self {
            name,
            group,
            students: Vec::new(),
            mentors: Vec::new(),
            comment: String::new(),
        }
    }

    /// Sets the students, in roster order.
    #[must_use]
    pub fn with_students(mut self, students: impl IntoIterator<Item = Student>) -> Self {
        self.students = students.into_iter().collect();
        self
    }

    /// Sets the mentors, in roster order.
    #[must_use]
    pub fn with_mentors(mut self, mentors: impl IntoIterator<Item = Mentor>) -> Self {
        self.mentors = mentors.into_iter().collect();
        self
    }

    /// Sets the repository description.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns the repository name.
    #[must_use]
    pub const fn name(&self) -> &RepoName {
        &self.name
    }

    /// Returns the group, if the roster is group-based.
    #[must_use]
    pub const fn group(&self) -> Option<&GroupName> {
        self.group.as_ref()
    }

    /// Returns the label used when talking to the operator about this
    /// repository: the group when present, otherwise the repository name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.group.as_ref().map_or(self.name.as_str(), GroupName::as_str)
    }

    /// Returns the students.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns the mentors.
    #[must_use]
    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    /// Returns the repository description.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns `true` when `username` is one of the students.
    #[must_use]
    pub fn has_student(&self, username: &str) -> bool {
        self.students
            .iter()
            .any(|student| student.username() == username)
    }
}
