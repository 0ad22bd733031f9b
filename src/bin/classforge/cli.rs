//! Command-line surface.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use classforge::assignment::services::BatchOptions;
use classforge::config::DEFAULT_CONFIG_FILE;
use classforge::roster::domain::RosterSelection;

/// Manage course repositories on GitHub.
#[derive(Debug, Parser)]
#[command(name = "classforge", version, about, propagate_version = true)]
pub(crate) struct Cli {
    /// Course configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: Utf8PathBuf,

    /// Forge API token.
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Batch operations on the group repositories.
    #[command(subcommand)]
    Assignment(AssignmentCommand),

    /// Grading helpers.
    #[command(subcommand)]
    Util(UtilCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum AssignmentCommand {
    /// Create one private repository per group from a template checkout.
    ///
    /// Force pushes to master are disabled so students cannot rewrite
    /// history. Students are not granted access; see `assignment grant`.
    #[command(alias = "create_repos")]
    CreateRepos {
        /// Checkout holding the starter code on master.
        #[arg(long, short)]
        source: Option<Utf8PathBuf>,
        #[command(flatten)]
        targets: Targets,
    },

    /// Push an update branch to every repository and open a pull request.
    #[command(alias = "create_pr")]
    CreatePr {
        /// Branch to create in the student repositories.
        #[arg(long)]
        branch: String,
        /// Pull request title.
        #[arg(long)]
        title: String,
        /// Pull request body.
        #[arg(long)]
        body: String,
        /// Checkout to push from.
        #[arg(long, short)]
        source: Option<Utf8PathBuf>,
        /// Local ref pushed to the new branch.
        #[arg(long, default_value = "master")]
        from: String,
        /// The branch was pushed before; only open the pull requests.
        #[arg(long, short = 'B')]
        branch_already_pushed: bool,
        #[command(flatten)]
        targets: Targets,
    },

    /// Create the milestones and issues listed in a YAML file.
    #[command(alias = "create_issues")]
    CreateIssues {
        /// Issue plan.
        path: Utf8PathBuf,
        #[command(flatten)]
        targets: Targets,
    },

    /// Show the latest commit of every repository.
    Pull {
        /// Checkout receiving one ref per repository.
        #[arg(long, short)]
        source: Option<Utf8PathBuf>,
        #[command(flatten)]
        targets: Targets,
    },

    /// Give every student push access to their repository.
    Grant {
        #[command(flatten)]
        targets: Targets,
    },

    /// Revoke student push access and cancel pending invitations.
    #[command(alias = "remove_grant")]
    RemoveGrant {
        #[command(flatten)]
        targets: Targets,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum UtilCommand {
    /// Print each line of a file containing one of the given strings.
    #[command(alias = "grep_in")]
    GrepIn {
        /// File to search.
        path: Utf8PathBuf,
        /// Comma-separated strings to look for.
        strings: String,
    },

    /// Copy every branch of a repository into its own folder.
    #[command(alias = "branches_to_folders")]
    BranchesToFolders {
        /// Repository checkout.
        source: Utf8PathBuf,
    },
}

/// Roster filters and confirmation mode shared by the batch commands.
#[derive(Debug, Args)]
pub(crate) struct Targets {
    /// Comma-separated usernames; defaults to all students.
    #[arg(long)]
    pub students: Option<String>,

    /// Comma-separated group names; defaults to all groups.
    #[arg(long)]
    pub groups: Option<String>,

    /// Process every repository without asking.
    #[arg(long, short)]
    pub yes: bool,
}

impl Targets {
    pub(crate) fn batch(&self) -> BatchOptions {
        BatchOptions::new(RosterSelection::from_lists(
            self.students.as_deref(),
            self.groups.as_deref(),
        ))
        .with_assume_yes(self.yes)
    }
}
