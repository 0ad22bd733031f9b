//! Port contracts for talking to the operator.

pub mod prompt;

#[cfg(test)]
pub use prompt::MockOperatorPrompt;
pub use prompt::{OperatorPrompt, OperatorPromptError, OperatorPromptResult};
