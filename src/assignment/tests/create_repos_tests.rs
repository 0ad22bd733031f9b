//! Tests for repository creation.

use super::{
    NO_ANSWERS, alpha_beta, assume_yes, group_repo, harness, harness_with, interactive, repo_name,
};
use crate::assignment::domain::{AssignmentError, RepoOutcome, SkipReason};
use crate::assignment::services::CreateReposRequest;
use crate::forge::adapters::ForgeEvent;
use crate::operator::adapters::ScriptedAnswer;
use crate::operator::domain::BatchChoice;
use crate::vcs::adapters::RecordingVcs;
use camino::Utf8PathBuf;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn source() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
    (temp, path)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn declined_group_is_never_created() {
    let (_temp, path) = source();
    let h = harness(
        alpha_beta(),
        2,
        [
            ScriptedAnswer::Confirm(false),
            ScriptedAnswer::Choice(BatchChoice::Proceed),
        ],
    );
    let request = CreateReposRequest {
        batch: interactive(),
        source: path,
    };

    let summary = h.service.create_repos(&request).await.expect("batch completes");

    assert_eq!(summary.acted_repos(), vec![&repo_name("course-alpha")]);
    assert!(h.forge.repository(&repo_name("course-beta")).is_none());
    assert_eq!(
        h.prompt.questions(),
        vec![
            "Include beta".to_owned(),
            "Do you want to create the repo in course-alpha?".to_owned(),
        ]
    );
    let notices = h.prompt.notices();
    assert!(
        notices.iter().any(|notice| notice.contains("Group beta has 1 students")),
        "missing roster notice: {notices:?}"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assume_yes_processes_every_group_without_asking() {
    let (_temp, path) = source();
    let h = harness(alpha_beta(), 2, NO_ANSWERS);
    let request = CreateReposRequest {
        batch: assume_yes(),
        source: path,
    };

    let summary = h.service.create_repos(&request).await.expect("batch completes");

    assert_eq!(summary.acted_repos().len(), 2);
    assert!(h.prompt.questions().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_is_populated_protected_and_described() {
    let (_temp, path) = source();
    fs::write(path.join("README.md.jinja"), "Group {{ group }}: {{ clone_url }}")
        .expect("write template");
    let h = harness(vec![group_repo("alpha", &["ann"])], 1, NO_ANSWERS);
    let request = CreateReposRequest {
        batch: assume_yes(),
        source: path.clone(),
    };

    h.service.create_repos(&request).await.expect("batch completes");

    assert_eq!(
        h.vcs.commands(),
        vec![
            "checkout master",
            "branch -D course-alpha",
            "checkout -b course-alpha",
            "add -A",
            "commit -m fill in templates",
            "push git@forge.test:course/course-alpha.git course-alpha:master",
            "checkout master",
        ]
    );
    assert_eq!(
        fs::read_to_string(path.join("README.md")).expect("rendered readme"),
        "Group alpha: https://forge.test/course/course-alpha.git"
    );
    assert!(!path.join("README.md.jinja").exists());
    let name = repo_name("course-alpha");
    assert_eq!(h.forge.protected_branches(&name), vec!["master".to_owned()]);
    assert_eq!(
        h.forge.repository(&name).and_then(|repo| repo.description),
        Some("ann".to_owned())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn existing_repository_is_skipped_untouched() {
    let (_temp, path) = source();
    let h = harness(vec![group_repo("alpha", &["ann"])], 1, NO_ANSWERS);
    h.forge.seed_repository(&repo_name("course-alpha"));
    let request = CreateReposRequest {
        batch: assume_yes(),
        source: path,
    };

    let summary = h.service.create_repos(&request).await.expect("batch completes");

    assert_eq!(
        summary.outcome_of("course-alpha"),
        Some(RepoOutcome::Skipped(SkipReason::AlreadyExists))
    );
    assert!(h.vcs.commands().is_empty());
    assert!(h.forge.events().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn abort_leaves_later_groups_untouched() {
    let (_temp, path) = source();
    let h = harness(
        vec![group_repo("alpha", &["ann"]), group_repo("beta", &["bob"])],
        1,
        [
            ScriptedAnswer::Choice(BatchChoice::Proceed),
            ScriptedAnswer::Choice(BatchChoice::Abort),
        ],
    );
    let request = CreateReposRequest {
        batch: interactive(),
        source: path,
    };

    let err = h.service.create_repos(&request).await.expect_err("operator aborts");

    assert!(matches!(err, AssignmentError::Aborted));
    assert!(h.forge.repository(&repo_name("course-alpha")).is_some());
    assert!(h.forge.repository(&repo_name("course-beta")).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn best_effort_git_steps_may_fail() {
    let (_temp, path) = source();
    let vcs = RecordingVcs::new().failing("branch -D").failing("commit");
    let h = harness_with(vec![group_repo("alpha", &["ann"])], 1, NO_ANSWERS, vcs);
    let request = CreateReposRequest {
        batch: assume_yes(),
        source: path,
    };

    let summary = h.service.create_repos(&request).await.expect("batch completes");

    assert_eq!(summary.acted_repos().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_push_stops_the_batch_and_keeps_the_empty_repository() {
    let (_temp, path) = source();
    let vcs = RecordingVcs::new().failing("push");
    let h = harness_with(
        vec![group_repo("alpha", &["ann"]), group_repo("beta", &["bob"])],
        1,
        NO_ANSWERS,
        vcs,
    );
    let request = CreateReposRequest {
        batch: assume_yes(),
        source: path,
    };

    let err = h.service.create_repos(&request).await.expect_err("push fails");

    assert!(matches!(err, AssignmentError::Vcs(_)));
    assert_eq!(
        h.forge.events(),
        vec![ForgeEvent::RepositoryCreated(repo_name("course-alpha"))]
    );
}
