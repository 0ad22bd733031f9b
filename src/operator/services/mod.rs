//! Confirmation services shared by every workflow.

mod confirmation;
mod eligibility;

pub use confirmation::{ConfirmationError, ConfirmationResult, ContinuePolicy};
pub use eligibility::select_eligible;
