//! Prompt port used by the confirmation policy and eligibility filter.

use crate::operator::domain::BatchChoice;
use std::sync::Arc;
use thiserror::Error;

/// Result type for prompt operations.
pub type OperatorPromptResult<T> = Result<T, OperatorPromptError>;

/// Blocking interaction with the person running the command.
#[cfg_attr(test, mockall::automock)]
pub trait OperatorPrompt: Send + Sync {
    /// Asks `question` and returns one of the four batch choices.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorPromptError`] when the answer cannot be obtained.
    fn choose(&self, question: &str) -> OperatorPromptResult<BatchChoice>;

    /// Asks a yes/no `question`, falling back to `default` on empty input.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorPromptError`] when the answer cannot be obtained.
    fn confirm(&self, question: &str, default: bool) -> OperatorPromptResult<bool>;

    /// Shows context the operator needs before answering.
    fn notify(&self, message: &str);
}

/// Errors returned by prompt implementations.
#[derive(Debug, Clone, Error)]
pub enum OperatorPromptError {
    /// The terminal interaction failed.
    #[error("operator interaction failed: {0}")]
    Interaction(Arc<dyn std::error::Error + Send + Sync>),

    /// The prompt produced an answer outside the offered choices.
    #[error("unexpected answer {0:?}")]
    UnexpectedChoice(char),

    /// A scripted operator ran out of answers.
    #[error("no scripted answer left for '{0}'")]
    ScriptExhausted(String),

    /// A scripted operator held an answer of the wrong kind.
    #[error("scripted answer does not fit '{0}'")]
    ScriptMismatch(String),
}

impl OperatorPromptError {
    /// Wraps a terminal interaction error.
    pub fn interaction(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Interaction(Arc::new(err))
    }
}
