//! When steps for assignment workflow scenarios.

use super::world::{CourseWorld, run_async};
use classforge::assignment::services::{
    BatchOptions, CreateIssuesRequest, CreateReposRequest, StatusRequest,
};
use classforge::roster::domain::RosterSelection;
use camino::Utf8PathBuf;
use rstest_bdd_macros::when;

fn assume_yes() -> BatchOptions {
    BatchOptions::new(RosterSelection::all()).with_assume_yes(true)
}

fn source_path(world: &CourseWorld) -> Result<Utf8PathBuf, eyre::Report> {
    Utf8PathBuf::from_path_buf(world.source.path().to_path_buf())
        .map_err(|path| eyre::eyre!("scratch path is not UTF-8: {}", path.display()))
}

#[when("access is granted without confirmation")]
fn grant_without_confirmation(world: &mut CourseWorld) {
    let service = world.service();
    world.last_summary = Some(run_async(service.grant(&assume_yes())));
}

#[when("access is revoked without confirmation")]
fn revoke_without_confirmation(world: &mut CourseWorld) {
    let service = world.service();
    world.last_summary = Some(run_async(service.remove_grant(&assume_yes())));
}

#[when("the status report runs without confirmation")]
fn status_without_confirmation(world: &mut CourseWorld) -> Result<(), eyre::Report> {
    let request = StatusRequest {
        batch: assume_yes(),
        source: source_path(world)?,
    };
    let service = world.service();
    world.last_report = Some(run_async(service.report_status(&request)));
    Ok(())
}

#[when("the repositories are created interactively")]
fn create_repos_interactively(world: &mut CourseWorld) -> Result<(), eyre::Report> {
    let request = CreateReposRequest {
        batch: BatchOptions::new(RosterSelection::all()),
        source: source_path(world)?,
    };
    let service = world.service();
    world.last_summary = Some(run_async(service.create_repos(&request)));
    Ok(())
}

#[when("the issues are created without confirmation")]
fn create_issues_without_confirmation(world: &mut CourseWorld) -> Result<(), eyre::Report> {
    let plan = world
        .plan
        .clone()
        .ok_or_else(|| eyre::eyre!("missing issue plan in scenario world"))?;
    let request = CreateIssuesRequest {
        batch: assume_yes(),
        plan,
    };
    let service = world.service();
    world.last_summary = Some(run_async(service.create_issues(&request)));
    Ok(())
}
