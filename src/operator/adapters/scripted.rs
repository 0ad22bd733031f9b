//! Prompt that replays pre-recorded answers.

use crate::operator::{
    domain::BatchChoice,
    ports::{OperatorPrompt, OperatorPromptError, OperatorPromptResult},
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// One pre-recorded operator answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Answer to a batch question.
    Choice(BatchChoice),
    /// Answer to a yes/no question.
    Confirm(bool),
}

/// Operator that answers from a script and records what it was shown.
///
/// Clones share the same script and transcript.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    answers: VecDeque<ScriptedAnswer>,
    questions: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedPrompt {
    /// Creates an operator that gives `answers` in order.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        let state = ScriptState {
            answers: answers.into_iter().collect(),
            ..ScriptState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Returns every question asked so far.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.lock().questions.clone()
    }

    /// Returns every notice shown so far.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.lock().notices.clone()
    }

    /// Returns the number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lock().answers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_answer(&self, question: &str) -> OperatorPromptResult<ScriptedAnswer> {
        let mut state = self.lock();
        state.questions.push(question.to_owned());
        state
            .answers
            .pop_front()
            .ok_or_else(|| OperatorPromptError::ScriptExhausted(question.to_owned()))
    }
}

impl OperatorPrompt for ScriptedPrompt {
    fn choose(&self, question: &str) -> OperatorPromptResult<BatchChoice> {
        match self.next_answer(question)? {
            ScriptedAnswer::Choice(choice) => Ok(choice),
            ScriptedAnswer::Confirm(_) => {
                Err(OperatorPromptError::ScriptMismatch(question.to_owned()))
            }
        }
    }

    fn confirm(&self, question: &str, _default: bool) -> OperatorPromptResult<bool> {
        match self.next_answer(question)? {
            ScriptedAnswer::Confirm(answer) => Ok(answer),
            ScriptedAnswer::Choice(_) => {
                Err(OperatorPromptError::ScriptMismatch(question.to_owned()))
            }
        }
    }

    fn notify(&self, message: &str) {
        self.lock().notices.push(message.to_owned());
    }
}
