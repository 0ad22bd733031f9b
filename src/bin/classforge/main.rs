//! Command-line entry point for course repository management.
//!
//! Usage:
//!
//! ```text
//! classforge [--config classforge.yaml] [--token <token>] assignment <command>
//! classforge util <command>
//! ```
//!
//! Every `assignment` command needs a forge token, passed with `--token` or
//! through `GITHUB_TOKEN`. Logging honours `RUST_LOG`; `--verbose` lowers the
//! default filter to `debug`.

mod cli;
mod report;

use camino::Utf8PathBuf;
use clap::Parser;
use classforge::assignment::domain::AssignmentError;
use classforge::assignment::services::{
    AssignmentService, CreateIssuesRequest, CreateReposRequest, PullRequestUpdate, StatusRequest,
};
use classforge::config::{ConfigError, CourseConfig};
use classforge::forge::adapters::GitHubForge;
use classforge::forge::ports::ForgeError;
use classforge::operator::adapters::ConsolePrompt;
use classforge::roster::adapters::CsvRoster;
use classforge::template::domain::IssuePlanError;
use classforge::template::services::load_issue_plan;
use classforge::toolbox::{ToolboxError, branches_to_folders, grep_in};
use classforge::vcs::adapters::GitCli;
use cli::{AssignmentCommand, Cli, Command, UtilCommand};
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

type Service = AssignmentService<CsvRoster, GitHubForge, GitCli, ConsolePrompt, DefaultClock>;

/// Failures surfaced to the operator as a non-zero exit.
#[derive(Debug, Error)]
enum CliError {
    #[error("a forge token is required: pass --token or set GITHUB_TOKEN")]
    MissingToken,
    #[error("status report aborted by the operator")]
    StatusAborted,
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Forge(#[from] ForgeError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    IssuePlan(#[from] IssuePlanError),
    #[error(transparent)]
    Toolbox(#[from] ToolboxError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)
        .and_then(|runtime| runtime.block_on(run(cli)));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Assignment(AssignmentError::Aborted)) => {
            warn!("aborted by the operator");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info,classforge=debug")
        } else {
            EnvFilter::new("warn,classforge=info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Assignment(command) => {
            let token = cli.token.ok_or(CliError::MissingToken)?;
            let config = CourseConfig::load(&cli.config)?;
            let service = build_service(&config, token)?;
            run_assignment(&service, &config, command).await
        }
        Command::Util(command) => run_util(&command).await,
    }
}

fn build_service(config: &CourseConfig, token: String) -> Result<Service, CliError> {
    let forge = GitHubForge::new(&config.api_url, config.organisation()?, token)?
        .with_web_url(&config.url);
    Ok(AssignmentService::new(
        Arc::new(config.roster()?),
        Arc::new(forge),
        Arc::new(GitCli::new()),
        Arc::new(ConsolePrompt::new()),
        Arc::new(DefaultClock),
        config.expectation(),
    ))
}

fn resolve_source(explicit: Option<Utf8PathBuf>, config: &CourseConfig) -> Option<Utf8PathBuf> {
    explicit.or_else(|| config.source.clone())
}

async fn run_assignment(
    service: &Service,
    config: &CourseConfig,
    command: AssignmentCommand,
) -> Result<(), CliError> {
    let (name, summary) = match command {
        AssignmentCommand::CreateRepos { source, targets } => {
            let request = CreateReposRequest {
                batch: targets.batch(),
                source: resolve_source(source, config).ok_or(AssignmentError::MissingSource)?,
            };
            ("create-repos", service.create_repos(&request).await?)
        }
        AssignmentCommand::CreatePr {
            branch,
            title,
            body,
            source,
            from,
            branch_already_pushed,
            targets,
        } => {
            let request = PullRequestUpdate::new(targets.batch(), branch, title, body)
                .with_source(resolve_source(source, config))
                .with_from(from)
                .with_already_pushed(branch_already_pushed);
            ("create-pr", service.create_pull_requests(&request).await?)
        }
        AssignmentCommand::CreateIssues { path, targets } => {
            let request = CreateIssuesRequest {
                batch: targets.batch(),
                plan: load_issue_plan(&path)?,
            };
            ("create-issues", service.create_issues(&request).await?)
        }
        AssignmentCommand::Pull { source, targets } => {
            let request = StatusRequest {
                batch: targets.batch(),
                source: resolve_source(source, config).ok_or(AssignmentError::MissingSource)?,
            };
            let status = service.report_status(&request).await?;
            report::print_status(&status).map_err(CliError::Output)?;
            if status.aborted() {
                return Err(CliError::StatusAborted);
            }
            return Ok(());
        }
        AssignmentCommand::Grant { targets } => ("grant", service.grant(&targets.batch()).await?),
        AssignmentCommand::RemoveGrant { targets } => (
            "remove-grant",
            service.remove_grant(&targets.batch()).await?,
        ),
    };
    report::log_summary(name, &summary);
    Ok(())
}

async fn run_util(command: &UtilCommand) -> Result<(), CliError> {
    match command {
        UtilCommand::GrepIn { path, strings } => {
            let lines = grep_in(path, strings)?;
            report::print_lines(&lines).map_err(CliError::Output)
        }
        UtilCommand::BranchesToFolders { source } => {
            let folders = branches_to_folders(&GitCli::new(), source).await?;
            info!(count = folders.len(), "expanded branches");
            Ok(())
        }
    }
}
