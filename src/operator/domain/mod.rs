//! Value types for operator decisions.

mod choice;
mod expectation;

pub use choice::BatchChoice;
pub use expectation::GroupExpectation;
