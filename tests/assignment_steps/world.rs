//! Shared world state for assignment workflow scenarios.

use std::sync::Arc;

use classforge::assignment::domain::{AssignmentResult, BatchSummary, StatusReport};
use classforge::assignment::services::AssignmentService;
use classforge::forge::adapters::InMemoryForge;
use classforge::operator::adapters::{ScriptedAnswer, ScriptedPrompt};
use classforge::operator::domain::GroupExpectation;
use classforge::roster::adapters::InMemoryRoster;
use classforge::roster::domain::{GroupName, Person, RepoName, StudentRepo};
use classforge::template::domain::IssuePlan;
use classforge::vcs::adapters::RecordingVcs;
use mockable::DefaultClock;
use rstest::fixture;
use tempfile::TempDir;

/// Organisation every scenario works in.
pub const ORGANISATION: &str = "course";

/// Usernames handed out to roster groups in order.
const USERNAMES: [&str; 6] = ["ann", "bob", "carol", "dave", "erin", "frank"];

/// Service type used by the scenario world.
pub type ScenarioService =
    AssignmentService<InMemoryRoster, InMemoryForge, RecordingVcs, ScriptedPrompt, DefaultClock>;

/// Scenario world for assignment behaviour tests.
pub struct CourseWorld {
    pub repos: Vec<StudentRepo>,
    pub expected_students: usize,
    pub answers: Vec<ScriptedAnswer>,
    pub forge: InMemoryForge,
    pub vcs: RecordingVcs,
    pub prompt: ScriptedPrompt,
    pub source: TempDir,
    pub plan: Option<IssuePlan>,
    pub last_summary: Option<AssignmentResult<BatchSummary>>,
    pub last_report: Option<AssignmentResult<StatusReport>>,
}

impl CourseWorld {
    /// Creates a world with an empty roster and an empty forge.
    ///
    /// # Panics
    ///
    /// Panics when the scratch source directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repos: Vec::new(),
            expected_students: 1,
            answers: Vec::new(),
            forge: InMemoryForge::new(ORGANISATION),
            vcs: RecordingVcs::new(),
            prompt: ScriptedPrompt::default(),
            source: TempDir::new().expect("scratch source directory"),
            plan: None,
            last_summary: None,
            last_report: None,
        }
    }

    /// Adds `course-<group>` with the next `count` usernames.
    pub fn add_group(&mut self, group: &str, count: usize) -> Result<(), eyre::Report> {
        let taken: usize = self.repos.iter().map(|repo| repo.students().len()).sum();
        let students = USERNAMES
            .iter()
            .skip(taken)
            .take(count)
            .map(|username| Person::new(*username).map(|person| person.with_comment(*username)))
            .collect::<Result<Vec<_>, _>>()?;
        if students.len() != count {
            return Err(eyre::eyre!("not enough usernames for group {group}"));
        }
        let comment = students
            .iter()
            .map(|student| student.username().to_owned())
            .collect::<Vec<_>>()
            .join(", ");
        let repo = StudentRepo::new(
            RepoName::new(format!("{ORGANISATION}-{group}"))?,
            GroupName::canonicalize(group),
        )
        .with_students(students)
        .with_comment(comment);
        self.repos.push(repo);
        Ok(())
    }

    /// Builds a service over the current roster and recorded answers.
    pub fn service(&mut self) -> ScenarioService {
        self.prompt = ScriptedPrompt::new(self.answers.drain(..));
        AssignmentService::new(
            Arc::new(InMemoryRoster::new(self.repos.clone())),
            Arc::new(self.forge.clone()),
            Arc::new(self.vcs.clone()),
            Arc::new(self.prompt.clone()),
            Arc::new(DefaultClock),
            GroupExpectation::new(self.expected_students, None),
        )
    }
}

impl Default for CourseWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CourseWorld {
    CourseWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a repository name used in a step.
pub fn repo_name(name: &str) -> Result<RepoName, eyre::Report> {
    Ok(RepoName::new(name)?)
}
