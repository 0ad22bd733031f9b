//! Version-control adapters.

pub mod git;
pub mod recording;

pub use git::GitCli;
pub use recording::RecordingVcs;

use crate::vcs::domain::CommitSummary;
use crate::vcs::ports::{VcsError, VcsResult};
use chrono::DateTime;

/// `git log` format producing the lines [`parse_commit_summary`] expects.
pub(crate) const COMMIT_SUMMARY_FORMAT: &str = "--pretty=format:%ct%n%an <%ae>%n%s";

/// Parses the output of `git log -1` run with [`COMMIT_SUMMARY_FORMAT`].
pub(crate) fn parse_commit_summary(command: &str, output: &str) -> VcsResult<CommitSummary> {
    let malformed = || VcsError::MalformedOutput {
        command: command.to_owned(),
        output: output.to_owned(),
    };
    let mut lines = output.lines();
    let seconds: i64 = lines
        .next()
        .and_then(|line| line.trim().parse().ok())
        .ok_or_else(malformed)?;
    let time = DateTime::from_timestamp(seconds, 0).ok_or_else(malformed)?;
    let author = lines.next().ok_or_else(malformed)?;
    let subject = lines.next().unwrap_or_default();
    Ok(CommitSummary::new(time, author, subject))
}
