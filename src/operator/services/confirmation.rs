//! Batch confirmation policy.
//!
//! Asked once per repository right before a side effect. `ProceedAll`
//! switches the policy to auto mode for the rest of the invocation; `Abort`
//! surfaces as [`ConfirmationError::Aborted`] so the caller unwinds the whole
//! command.

use crate::operator::{
    domain::BatchChoice,
    ports::{OperatorPrompt, OperatorPromptError},
};
use crate::roster::domain::RepoName;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop a batch.
#[derive(Debug, Clone, Error)]
pub enum ConfirmationError {
    /// The operator chose to abort.
    #[error("aborted by operator")]
    Aborted,

    /// The operator could not be asked.
    #[error(transparent)]
    Prompt(#[from] OperatorPromptError),
}

/// Result type for confirmation operations.
pub type ConfirmationResult<T> = Result<T, ConfirmationError>;

/// Tri-state gate between repositories: ask, auto-approve, or abort.
pub struct ContinuePolicy<'a, P>
where
    P: OperatorPrompt + ?Sized,
{
    prompt: &'a P,
    action: String,
    auto_mode: bool,
}

impl<'a, P> ContinuePolicy<'a, P>
where
    P: OperatorPrompt + ?Sized,
{
    /// Creates a policy describing `action` in its questions.
    ///
    /// With `auto_mode` set the policy never asks.
    #[must_use]
    pub fn new(prompt: &'a P, action: impl Into<String>, auto_mode: bool) -> Self {
        Self {
            prompt,
            action: action.into(),
            auto_mode,
        }
    }

    /// Returns `true` once the policy stopped asking.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        self.auto_mode
    }

    /// Decides whether `repo` must be skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::Aborted`] when the operator aborts and
    /// [`ConfirmationError::Prompt`] when the operator cannot be asked.
    pub fn must_skip(&mut self, repo: &RepoName) -> ConfirmationResult<bool> {
        if self.auto_mode {
            return Ok(false);
        }

        let question = format!("Do you want to {} in {repo}?", self.action);
        match self.prompt.choose(&question)? {
            BatchChoice::Proceed => Ok(false),
            BatchChoice::ProceedAll => {
                self.auto_mode = true;
                Ok(false)
            }
            BatchChoice::Skip => {
                info!(repository = %repo, "skipping");
                Ok(true)
            }
            BatchChoice::Abort => {
                warn!(repository = %repo, "aborting");
                Err(ConfirmationError::Aborted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::adapters::{ScriptedAnswer, ScriptedPrompt};
    use crate::operator::ports::MockOperatorPrompt;
    use rstest::rstest;

    fn repo(name: &str) -> RepoName {
        RepoName::new(name).expect("valid repository name")
    }

    fn names(count: usize) -> Vec<RepoName> {
        (0..count).map(|index| repo(&format!("course-{index}"))).collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    fn auto_mode_never_prompts(#[case] count: usize) {
        let mut prompt = MockOperatorPrompt::new();
        prompt.expect_choose().never();
        let mut policy = ContinuePolicy::new(&prompt, "grant", true);

        for name in names(count) {
            assert!(!policy.must_skip(&name).expect("auto mode cannot fail"));
        }
    }

    #[rstest]
    fn proceed_keeps_asking() {
        let mut prompt = MockOperatorPrompt::new();
        prompt
            .expect_choose()
            .times(3)
            .returning(|_| Ok(BatchChoice::Proceed));
        let mut policy = ContinuePolicy::new(&prompt, "grant", false);

        for name in names(3) {
            assert!(!policy.must_skip(&name).expect("proceed"));
        }
        assert!(!policy.is_auto());
    }

    #[rstest]
    fn proceed_all_stops_asking_for_the_rest() {
        let mut prompt = MockOperatorPrompt::new();
        prompt
            .expect_choose()
            .times(1)
            .returning(|_| Ok(BatchChoice::ProceedAll));
        let mut policy = ContinuePolicy::new(&prompt, "create the repo", false);

        for name in names(5) {
            assert!(!policy.must_skip(&name).expect("proceed"));
        }
        assert!(policy.is_auto());
    }

    #[rstest]
    fn skip_only_affects_the_current_repository() {
        let prompt = ScriptedPrompt::new([
            ScriptedAnswer::Choice(BatchChoice::Skip),
            ScriptedAnswer::Choice(BatchChoice::Proceed),
        ]);
        let mut policy = ContinuePolicy::new(&prompt, "pull", false);

        assert!(policy.must_skip(&repo("course-a")).expect("skip"));
        assert!(!policy.must_skip(&repo("course-b")).expect("proceed"));
        assert_eq!(
            prompt.questions(),
            [
                "Do you want to pull in course-a?".to_owned(),
                "Do you want to pull in course-b?".to_owned(),
            ]
        );
    }

    #[rstest]
    fn abort_is_an_error() {
        let prompt = ScriptedPrompt::new([ScriptedAnswer::Choice(BatchChoice::Abort)]);
        let mut policy = ContinuePolicy::new(&prompt, "pull", false);

        assert!(matches!(
            policy.must_skip(&repo("course-a")),
            Err(ConfirmationError::Aborted)
        ));
    }

    #[rstest]
    fn prompt_failures_propagate() {
        let prompt = ScriptedPrompt::new([]);
        let mut policy = ContinuePolicy::new(&prompt, "pull", false);

        assert!(matches!(
            policy.must_skip(&repo("course-a")),
            Err(ConfirmationError::Prompt(
                OperatorPromptError::ScriptExhausted(_)
            ))
        ));
    }
}
