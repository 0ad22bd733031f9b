//! Port contracts for roster resolution.

pub mod provider;

pub use provider::{RosterError, RosterProvider, RosterResult};
