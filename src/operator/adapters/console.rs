//! Terminal prompt built on `dialoguer`.

use crate::operator::{
    domain::BatchChoice,
    ports::{OperatorPrompt, OperatorPromptError, OperatorPromptResult},
};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::io::Write;
use tracing::debug;

/// Prompts on the controlling terminal.
#[derive(Default)]
pub struct ConsolePrompt {
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    /// Creates a prompt with the default colour theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperatorPrompt for ConsolePrompt {
    fn choose(&self, question: &str) -> OperatorPromptResult<BatchChoice> {
        let options = BatchChoice::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let key = Input::<char>::with_theme(&self.theme)
            .with_prompt(format!("{question} [{options}]"))
            .validate_with(|key: &char| parse_key(*key).map(|_| ()))
            .interact_text()
            .map_err(OperatorPromptError::interaction)?;
        parse_key(key).map_err(|_| OperatorPromptError::UnexpectedChoice(key))
    }

    fn confirm(&self, question: &str, default: bool) -> OperatorPromptResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(OperatorPromptError::interaction)
    }

    fn notify(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        if let Err(err) = writeln!(stderr, "{message}") {
            debug!(error = %err, "could not write operator notice");
        }
    }
}

/// Maps a typed key to its choice; the error text is shown before re-asking.
fn parse_key(key: char) -> Result<BatchChoice, String> {
    BatchChoice::from_key(key).ok_or_else(|| {
        let keys: String = BatchChoice::ALL.iter().map(|choice| choice.key()).collect();
        format!("answer with one of {keys}")
    })
}
