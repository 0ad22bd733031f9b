//! Workflow results and errors.

mod error;
mod outcome;
mod status;

pub use error::{AssignmentError, AssignmentResult};
pub use outcome::{BatchSummary, RepoOutcome, SkipReason};
pub use status::{StatusReport, StatusRow};
