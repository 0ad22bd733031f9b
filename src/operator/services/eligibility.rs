//! Eligibility filter for group repositories.

use crate::operator::{
    domain::GroupExpectation,
    ports::{OperatorPrompt, OperatorPromptResult},
};
use crate::roster::domain::StudentRepo;
use tracing::info;

/// Keeps repositories matching `expectation` and asks about the others.
///
/// Each mismatching repository is described to the operator, who decides
/// whether to include it (default: no). Order is preserved.
///
/// # Errors
///
/// Returns prompt errors when the operator cannot be asked.
pub fn select_eligible<P>(
    repos: Vec<StudentRepo>,
    expectation: &GroupExpectation,
    prompt: &P,
) -> OperatorPromptResult<Vec<StudentRepo>>
where
    P: OperatorPrompt + ?Sized,
{
    let mut selected = Vec::with_capacity(repos.len());
    for repo in repos {
        if expectation.matches(&repo) {
            selected.push(repo);
            continue;
        }

        prompt.notify(&describe_mismatch(&repo, expectation));
        if prompt.confirm(&format!("Include {}", repo.label()), false)? {
            info!(group = repo.label(), "explicitly including");
            selected.push(repo);
        } else {
            info!(group = repo.label(), "skipping");
        }
    }
    Ok(selected)
}

fn describe_mismatch(repo: &StudentRepo, expectation: &GroupExpectation) -> String {
    let mut lines = Vec::with_capacity(1 + repo.students().len() + repo.mentors().len());
    match expectation.mentors() {
        Some(mentors) => lines.push(format!(
            "Group {} has {} students and {} mentors (expected {}/{mentors}):",
            repo.label(),
            repo.students().len(),
            repo.mentors().len(),
            expectation.students(),
        )),
        None if !repo.mentors().is_empty() => lines.push(format!(
            "Group {} has {} students and {} mentors (expected {}/any):",
            repo.label(),
            repo.students().len(),
            repo.mentors().len(),
            expectation.students(),
        )),
        None => lines.push(format!(
            "Group {} has {} students (expected {}):",
            repo.label(),
            repo.students().len(),
            expectation.students(),
        )),
    }
    lines.extend(
        repo.students()
            .iter()
            .map(|student| format!("   - student {} ({})", student.username(), student.comment())),
    );
    lines.extend(
        repo.mentors()
            .iter()
            .map(|mentor| format!("   - mentor {} ({})", mentor.username(), mentor.comment())),
    );
    lines.join("\n")
}
