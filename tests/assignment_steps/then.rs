//! Then steps for assignment workflow scenarios.

use super::world::{CourseWorld, repo_name};
use classforge::assignment::domain::{AssignmentError, BatchSummary};
use classforge::forge::adapters::ForgeEvent;
use classforge::roster::domain::RepoName;
use rstest_bdd_macros::then;

fn summary(world: &CourseWorld) -> Result<&BatchSummary, eyre::Report> {
    world
        .last_summary
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing batch result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected workflow failure: {err}"))
}

#[then("every group repository was acted upon")]
fn every_repository_acted(world: &CourseWorld) -> Result<(), eyre::Report> {
    let acted: Vec<&str> = summary(world)?
        .acted_repos()
        .into_iter()
        .map(RepoName::as_str)
        .collect();
    let expected: Vec<&str> = world.repos.iter().map(|repo| repo.name().as_str()).collect();
    if acted != expected {
        return Err(eyre::eyre!("expected {expected:?} to be acted upon, got {acted:?}"));
    }
    Ok(())
}

#[then("the operator was never asked anything")]
fn operator_never_asked(world: &CourseWorld) -> Result<(), eyre::Report> {
    let questions = world.prompt.questions();
    if !questions.is_empty() {
        return Err(eyre::eyre!("expected no questions, got {questions:?}"));
    }
    Ok(())
}

#[then(r#"the operator was asked "{question}""#)]
fn operator_was_asked(world: &CourseWorld, question: String) -> Result<(), eyre::Report> {
    let questions = world.prompt.questions();
    if !questions.contains(&question) {
        return Err(eyre::eyre!("expected {question:?} among {questions:?}"));
    }
    Ok(())
}

#[then("the report has a row for every group repository")]
fn report_covers_every_repository(world: &CourseWorld) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status report in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected status failure: {err}"))?;
    if report.aborted() {
        return Err(eyre::eyre!("status report was aborted"));
    }
    for repo in &world.repos {
        if !report.rows().iter().any(|row| &row.repo == repo.name()) {
            return Err(eyre::eyre!("no status row for {}", repo.name()));
        }
    }
    let times: Vec<_> = report.rows().iter().map(|row| row.time).collect();
    if !times.is_sorted() {
        return Err(eyre::eyre!("status rows are not in time order: {times:?}"));
    }
    Ok(())
}

#[then(r#"only repository "{name}" exists on the forge"#)]
fn only_repository_exists(world: &CourseWorld, name: String) -> Result<(), eyre::Report> {
    for repo in &world.repos {
        let exists = world.forge.repository(repo.name()).is_some();
        let wanted = repo.name().as_str() == name;
        if exists != wanted {
            return Err(eyre::eyre!(
                "repository {} exists: {exists}, expected {wanted}",
                repo.name()
            ));
        }
    }
    Ok(())
}

#[then(r#"repository "{repo}" has milestone "{title}""#)]
fn repository_has_milestone(
    world: &CourseWorld,
    repo: String,
    title: String,
) -> Result<(), eyre::Report> {
    let milestones = world.forge.milestones(&repo_name(&repo)?);
    if !milestones.iter().any(|milestone| milestone.title == title) {
        return Err(eyre::eyre!("milestone {title} missing from {milestones:?}"));
    }
    Ok(())
}

#[then(r#"issue "{issue}" of repository "{repo}" is attached to milestone "{title}""#)]
fn issue_attached_to_milestone(
    world: &CourseWorld,
    issue: String,
    repo: String,
    title: String,
) -> Result<(), eyre::Report> {
    let name = repo_name(&repo)?;
    let number = world
        .forge
        .milestones(&name)
        .into_iter()
        .find(|milestone| milestone.title == title)
        .map(|milestone| milestone.number)
        .ok_or_else(|| eyre::eyre!("milestone {title} missing from {repo}"))?;
    let issues = world.forge.issues(&name);
    let created = issues
        .iter()
        .find(|created| created.title == issue)
        .ok_or_else(|| eyre::eyre!("issue {issue} missing from {repo}"))?;
    if created.milestone != Some(number) {
        return Err(eyre::eyre!(
            "issue {issue} has milestone {:?}, expected {number}",
            created.milestone
        ));
    }
    Ok(())
}

#[then(r#"issue creation fails because milestone "{title}" does not exist"#)]
fn issue_creation_fails(world: &CourseWorld, title: String) -> Result<(), eyre::Report> {
    let result = world
        .last_summary
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing batch result in scenario world"))?;
    match result {
        Err(AssignmentError::MilestoneNotFound { title: missing, .. }) if *missing == title => {}
        other => {
            return Err(eyre::eyre!(
                "expected a missing milestone {title:?} error, got {other:?}"
            ));
        }
    }
    let created = world
        .repos
        .iter()
        .flat_map(|repo| world.forge.issues(repo.name()))
        .count();
    if created != 0 {
        return Err(eyre::eyre!("expected no issues, found {created}"));
    }
    Ok(())
}

#[then(r#"the invitation to "{repo}" is withdrawn before "{username}" is removed"#)]
fn invitation_withdrawn_first(
    world: &CourseWorld,
    repo: String,
    username: String,
) -> Result<(), eyre::Report> {
    let name = repo_name(&repo)?;
    let events = world.forge.events();
    let withdrawn = events
        .iter()
        .position(|event| {
            matches!(event, ForgeEvent::InvitationDeleted { repo: from, .. } if *from == name)
        })
        .ok_or_else(|| eyre::eyre!("no invitation was withdrawn from {name}"))?;
    let removed = events
        .iter()
        .position(|event| {
            matches!(
                event,
                ForgeEvent::CollaboratorRemoved { repo: from, username: who }
                    if *from == name && *who == username
            )
        })
        .ok_or_else(|| eyre::eyre!("{username} was never removed from {name}"))?;
    if withdrawn > removed {
        return Err(eyre::eyre!("collaborator removed before the invitation: {events:?}"));
    }
    Ok(())
}

#[then(r#"every student of "{repo}" is removed as a collaborator"#)]
fn every_student_removed(world: &CourseWorld, repo: String) -> Result<(), eyre::Report> {
    let name = repo_name(&repo)?;
    let roster_repo = world
        .repos
        .iter()
        .find(|candidate| candidate.name() == &name)
        .ok_or_else(|| eyre::eyre!("{name} is not in the roster"))?;
    let events = world.forge.events();
    for student in roster_repo.students() {
        let removed = events.iter().any(|event| {
            matches!(
                event,
                ForgeEvent::CollaboratorRemoved { repo: from, username: who }
                    if *from == name && who == student.username()
            )
        });
        if !removed {
            return Err(eyre::eyre!("{} was not removed from {name}", student.username()));
        }
    }
    Ok(())
}
