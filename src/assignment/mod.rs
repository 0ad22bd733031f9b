//! Assignment workflows: the commands run against every group repository.
//!
//! Each workflow follows the same pipeline: resolve the roster, optionally
//! run the eligibility filter, then walk the repositories in roster order
//! behind a [`crate::operator::services::ContinuePolicy`]. Per-repository
//! results are collected in a [`domain::BatchSummary`]; the status report
//! produces a [`domain::StatusReport`] instead.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
