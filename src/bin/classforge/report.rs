//! Terminal rendering of workflow results.

use chrono::Local;
use classforge::assignment::domain::{BatchSummary, RepoOutcome, StatusReport};
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::{self, Write};
use tracing::info;

pub(crate) const STATUS_HEADERS: [&str; 5] = [
    "Repository",
    "Description",
    "Last commit time",
    "Committer info",
    "Commit summary",
];

/// Builds the status table, oldest row first.
pub(crate) fn status_table(report: &StatusReport) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(STATUS_HEADERS.map(Cell::new));
    for row in report.rows() {
        table.add_row(vec![
            Cell::new(row.repo.as_str()),
            Cell::new(row.description.as_deref().unwrap_or_default()),
            Cell::new(
                row.time
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            ),
            Cell::new(row.committer.as_deref().unwrap_or_default()),
            Cell::new(&row.summary),
        ]);
    }
    table
}

pub(crate) fn print_status(report: &StatusReport) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", status_table(report))
}

pub(crate) fn print_lines(lines: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

pub(crate) fn log_summary(command: &str, summary: &BatchSummary) {
    for (repo, outcome) in summary.entries() {
        match outcome {
            RepoOutcome::Acted => info!(%command, repository = %repo, "done"),
            RepoOutcome::Skipped(reason) => {
                info!(%command, repository = %repo, %reason, "skipped");
            }
        }
    }
    info!(
        %command,
        acted = summary.acted_repos().len(),
        total = summary.entries().len(),
        "batch finished"
    );
}
