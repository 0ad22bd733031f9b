//! Workflow tests against in-memory collaborators.

mod create_repos_tests;

use crate::assignment::services::{AssignmentService, BatchOptions};
use crate::forge::adapters::InMemoryForge;
use crate::operator::adapters::{ScriptedAnswer, ScriptedPrompt};
use crate::operator::domain::GroupExpectation;
use crate::roster::adapters::InMemoryRoster;
use crate::roster::domain::{GroupName, Person, RepoName, RosterSelection, StudentRepo};
use crate::vcs::adapters::RecordingVcs;
use mockable::DefaultClock;
use std::sync::Arc;

/// Script for runs that must never ask anything.
pub(super) const NO_ANSWERS: [ScriptedAnswer; 0] = [];

pub(super) type TestService =
    AssignmentService<InMemoryRoster, InMemoryForge, RecordingVcs, ScriptedPrompt, DefaultClock>;

/// Collaborators shared with the service under test.
pub(super) struct Harness {
    pub forge: InMemoryForge,
    pub vcs: RecordingVcs,
    pub prompt: ScriptedPrompt,
    pub service: TestService,
}

pub(super) fn repo_name(name: &str) -> RepoName {
    RepoName::new(name).expect("valid repository name")
}

/// Group repository `course-<group>` with the given students.
pub(super) fn group_repo(group: &str, usernames: &[&str]) -> StudentRepo {
    let students = usernames
        .iter()
        .map(|username| Person::new(*username).expect("valid username").with_comment(*username));
    StudentRepo::new(
        repo_name(&format!("course-{group}")),
        GroupName::canonicalize(group),
    )
    .with_students(students)
    .with_comment(usernames.join(", "))
}

/// `alpha` has two students, `beta` one.
pub(super) fn alpha_beta() -> Vec<StudentRepo> {
    vec![
        group_repo("alpha", &["ann", "bob"]),
        group_repo("beta", &["carol"]),
    ]
}

pub(super) fn harness(
    repos: Vec<StudentRepo>,
    expected_students: usize,
    answers: impl IntoIterator<Item = ScriptedAnswer>,
) -> Harness {
    harness_with(repos, expected_students, answers, RecordingVcs::new())
}

pub(super) fn harness_with(
    repos: Vec<StudentRepo>,
    expected_students: usize,
    answers: impl IntoIterator<Item = ScriptedAnswer>,
    vcs: RecordingVcs,
) -> Harness {
    let forge = InMemoryForge::new("course");
    let prompt = ScriptedPrompt::new(answers);
    let service = AssignmentService::new(
        Arc::new(InMemoryRoster::new(repos)),
        Arc::new(forge.clone()),
        Arc::new(vcs.clone()),
        Arc::new(prompt.clone()),
        Arc::new(DefaultClock),
        GroupExpectation::new(expected_students, None),
    );
    Harness {
        forge,
        vcs,
        prompt,
        service,
    }
}

pub(super) fn interactive() -> BatchOptions {
    BatchOptions::new(RosterSelection::all())
}

pub(super) fn assume_yes() -> BatchOptions {
    BatchOptions::new(RosterSelection::all()).with_assume_yes(true)
}

impl Harness {
    /// Seeds every repository of `repos` on the forge.
    pub fn seed(&self, repos: &[StudentRepo]) {
        for repo in repos {
            self.forge.seed_repository(repo.name());
        }
    }
}
