//! Local version control: branch juggling, pushes, fetches and commit lookup.
//!
//! Workflows drive the local source repository through the
//! [`ports::VersionControl`] contract. Production uses the `git` binary via
//! [`adapters::GitCli`]; tests use [`adapters::RecordingVcs`], which records
//! every invocation in `git` argument form.

pub mod adapters;
pub mod domain;
pub mod ports;
