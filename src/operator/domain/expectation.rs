//! Expected group composition.

use crate::roster::domain::StudentRepo;

/// How many students and mentors every group repository should have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupExpectation {
    students: usize,
    mentors: Option<usize>,
}

impl GroupExpectation {
    /// Creates an expectation.
    ///
    /// `students == 0` accepts any student count and `mentors == None` any
    /// mentor count.
    #[must_use]
    pub const fn new(students: usize, mentors: Option<usize>) -> Self {
        Self { students, mentors }
    }

    /// Returns the expected student count.
    #[must_use]
    pub const fn students(&self) -> usize {
        self.students
    }

    /// Returns the expected mentor count, if constrained.
    #[must_use]
    pub const fn mentors(&self) -> Option<usize> {
        self.mentors
    }

    /// Returns `true` when `repo` has the expected composition.
    #[must_use]
    pub fn matches(&self, repo: &StudentRepo) -> bool {
        (self.students == 0 || repo.students().len() == self.students)
            && self
                .mentors
                .is_none_or(|expected| repo.mentors().len() == expected)
    }
}
