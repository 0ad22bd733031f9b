//! Given steps for assignment workflow scenarios.

use super::world::{CourseWorld, repo_name};
use classforge::operator::adapters::ScriptedAnswer;
use classforge::operator::domain::BatchChoice;
use classforge::template::domain::IssuePlan;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(
    r#"a roster with group "{first}" of {first_count:usize} students and group "{second}" of {second_count:usize} student"#
)]
fn roster_with_two_groups(
    world: &mut CourseWorld,
    first: String,
    first_count: usize,
    second: String,
    second_count: usize,
) -> Result<(), eyre::Report> {
    world.add_group(&first, first_count)?;
    world.add_group(&second, second_count)?;
    Ok(())
}

#[given("the course expects {count:usize} students per repository")]
fn course_expects(world: &mut CourseWorld, count: usize) {
    world.expected_students = count;
}

#[given("every group repository exists on the forge")]
fn every_repository_exists(world: &mut CourseWorld) {
    for repo in &world.repos {
        world.forge.seed_repository(repo.name());
    }
}

#[given(r#"the operator declines to include "{group}""#)]
fn operator_declines_group(world: &mut CourseWorld, group: String) -> Result<(), eyre::Report> {
    if !world.repos.iter().any(|repo| repo.label() == group) {
        return Err(eyre::eyre!("group {group} is not in the roster"));
    }
    world.answers.push(ScriptedAnswer::Confirm(false));
    Ok(())
}

#[given("the operator then proceeds with every remaining repository")]
fn operator_proceeds_with_all(world: &mut CourseWorld) {
    world
        .answers
        .push(ScriptedAnswer::Choice(BatchChoice::ProceedAll));
}

#[given(
    r#"an issue plan with milestone "{milestone}" followed by issue "{title}" in milestone "{target}""#
)]
fn plan_milestone_first(
    world: &mut CourseWorld,
    milestone: String,
    title: String,
    target: String,
) -> Result<(), eyre::Report> {
    let yaml = format!(
        "- type: milestone\n  title: {milestone}\n- type: issue\n  title: {title}\n  milestone: {target}\n"
    );
    world.plan = Some(IssuePlan::parse(&yaml).wrap_err("parse milestone-first plan")?);
    Ok(())
}

#[given(
    r#"an issue plan with issue "{title}" in milestone "{target}" followed by milestone "{milestone}""#
)]
fn plan_issue_first(
    world: &mut CourseWorld,
    title: String,
    target: String,
    milestone: String,
) -> Result<(), eyre::Report> {
    let yaml = format!(
        "- type: issue\n  title: {title}\n  milestone: {target}\n- type: milestone\n  title: {milestone}\n"
    );
    world.plan = Some(IssuePlan::parse(&yaml).wrap_err("parse issue-first plan")?);
    Ok(())
}

#[given(r#"student "{username}" has a pending invitation to "{repo}""#)]
fn pending_invitation(
    world: &mut CourseWorld,
    username: String,
    repo: String,
) -> Result<(), eyre::Report> {
    world
        .forge
        .seed_invitation(&repo_name(&repo)?, &username)
        .wrap_err("seed invitation")?;
    Ok(())
}
