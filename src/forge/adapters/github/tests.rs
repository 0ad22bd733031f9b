//! HTTP-level tests for the GitHub forge against a local mock server.

use super::GitHubForge;
use crate::forge::domain::{NewIssue, NewMilestone};
use crate::forge::ports::{Forge, ForgeError};
use crate::roster::domain::RepoName;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forge(server: &MockServer) -> GitHubForge {
    GitHubForge::new(server.uri(), "course", "secret").expect("client builds")
}

fn repo() -> RepoName {
    RepoName::new("course-alpha").expect("valid repo name")
}

fn repository_body() -> serde_json::Value {
    json!({
        "name": "course-alpha",
        "clone_url": "https://github.com/course/course-alpha.git",
        "ssh_url": "git@github.com:course/course-alpha.git",
        "html_url": "https://github.com/course/course-alpha",
        "description": null
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_repository_sends_token_and_maps_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/course/course-alpha"))
        .and(header("authorization", "Bearer secret"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repository_body()))
        .expect(1)
        .mount(&server)
        .await;

    let found = forge(&server)
        .get_repository(&repo())
        .await
        .expect("repository found");

    assert_eq!(found.name, repo());
    assert_eq!(found.ssh_url, "git@github.com:course/course-alpha.git");
    assert_eq!(found.description, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_repository_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/course/course-alpha"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let err = forge(&server)
        .get_repository(&repo())
        .await
        .expect_err("repository is missing");

    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_repository_reports_taken_name_as_already_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orgs/course/repos"))
        .and(body_partial_json(json!({"name": "course-alpha", "private": true})))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed.",
            "errors": [{"resource": "Repository", "code": "custom", "field": "name"}]
        })))
        .mount(&server)
        .await;

    let err = forge(&server)
        .create_repository(&repo(), true)
        .await
        .expect_err("name is taken");

    assert!(matches!(err, ForgeError::AlreadyExists(_)), "unexpected error: {err:?}");
}

#[rstest]
#[case::single_duplicate(json!([{"resource": "Milestone", "code": "already_exists", "field": "title"}]), true)]
#[case::two_problems(json!([
    {"resource": "Milestone", "code": "already_exists", "field": "title"},
    {"resource": "Milestone", "code": "invalid", "field": "due_on"}
]), false)]
#[case::other_validation(json!([{"resource": "Milestone", "code": "invalid", "field": "due_on"}]), false)]
#[tokio::test(flavor = "multi_thread")]
async fn milestone_conflict_requires_a_single_already_exists_error(
    #[case] errors: serde_json::Value,
    #[case] expect_already_exists: bool,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/course/course-alpha/milestones"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "errors": errors
        })))
        .mount(&server)
        .await;

    let request = NewMilestone {
        title: "Week 1".to_owned(),
        description: None,
        due_on: None,
    };
    let err = forge(&server)
        .create_milestone(&repo(), &request)
        .await
        .expect_err("milestone rejected");

    match err {
        ForgeError::AlreadyExists(_) => assert!(expect_already_exists),
        ForgeError::Api { status, .. } => {
            assert!(!expect_already_exists);
            assert_eq!(status, 422);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_milestones_follows_pages_until_a_short_page() {
    let server = MockServer::start().await;
    let full_page: Vec<_> = (1..=100)
        .map(|number| json!({"number": number, "title": format!("M{number}")}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/repos/course/course-alpha/milestones"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_page))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/course/course-alpha/milestones"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"number": 101, "title": "Final"}])),
        )
        .mount(&server)
        .await;

    let milestones = forge(&server)
        .list_milestones(&repo())
        .await
        .expect("milestones listed");

    assert_eq!(milestones.len(), 101);
    assert_eq!(milestones.last().map(|m| m.title.as_str()), Some("Final"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_issue_sends_milestone_labels_and_assignees() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/course/course-alpha/issues"))
        .and(body_partial_json(json!({
            "title": "Task 1",
            "milestone": 3,
            "labels": ["homework"],
            "assignees": ["alice"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 7,
            "html_url": "https://github.com/course/course-alpha/issues/7"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let issue = NewIssue {
        title: "Task 1".to_owned(),
        body: String::new(),
        milestone: Some(3),
        labels: vec!["homework".to_owned()],
        assignees: vec!["alice".to_owned()],
    };
    let number = forge(&server)
        .create_issue(&repo(), &issue)
        .await
        .expect("issue created");

    assert_eq!(number, 7);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invitations_expose_invitee_logins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/course/course-alpha/invitations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 11, "invitee": {"login": "alice"}},
            {"id": 12, "invitee": null}
        ])))
        .mount(&server)
        .await;

    let invitations = forge(&server)
        .list_invitations(&repo())
        .await
        .expect("invitations listed");

    let invitees: Vec<_> = invitations.iter().map(|i| i.invitee.as_deref()).collect();
    assert_eq!(invitees, vec![Some("alice"), None]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn protect_branch_forbids_force_pushes_and_deletion() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/course/course-alpha/branches/master/protection"))
        .and(body_partial_json(json!({
            "allow_force_pushes": false,
            "allow_deletions": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    forge(&server)
        .protect_branch(&repo(), "master")
        .await
        .expect("branch protected");
}
