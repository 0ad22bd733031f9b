//! Forge access: repositories, pull requests, issues and collaborators.
//!
//! The forge is only reached through the [`ports::Forge`] contract. Expected
//! outcomes such as "repository missing" or "milestone already exists" are
//! ordinary [`ports::ForgeError`] variants so workflows branch on them with
//! `match` rather than inspecting raw HTTP responses.
//!
//! - Domain records in [`domain`]
//! - Forge contract in [`ports`]
//! - GitHub REST and in-memory implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
