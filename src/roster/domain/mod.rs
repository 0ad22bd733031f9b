//! Roster value types.
//!
//! Values are immutable once built; the roster provider assembles them and
//! workflows only read them.

mod error;
mod names;
mod person;
mod selection;
mod student_repo;

pub use error::RosterDomainError;
pub use names::{GroupName, RepoName};
pub use person::{Mentor, Person, Student};
pub use selection::RosterSelection;
pub use student_repo::StudentRepo;
