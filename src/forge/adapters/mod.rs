//! Forge adapters: the GitHub REST API and an in-memory forge for tests.

pub mod github;
pub mod memory;

pub use github::GitHubForge;
pub use memory::{ForgeEvent, InMemoryForge};
