//! Port contracts for version control.

pub mod version_control;

pub use version_control::{VcsError, VcsResult, VersionControl};
