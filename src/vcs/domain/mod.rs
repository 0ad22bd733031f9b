//! Version-control value types.

mod commit;

pub use commit::CommitSummary;
