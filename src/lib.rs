//! Classforge: course repository management on a code forge.
//!
//! Teaching staff describe a course once (organisation, roster files, group
//! sizes) and then run batch commands against every group repository:
//! create repositories from a template checkout, push updates as pull
//! requests, seed milestones and issues, grant or revoke student access, and
//! report the newest commit of every group.
//!
//! # Architecture
//!
//! The crate is split into bounded contexts, each following the hexagonal
//! layout:
//!
//! - **Domain**: plain values and error types
//! - **Ports**: traits for the outside world (forge, git, operator, roster)
//! - **Adapters**: concrete implementations, plus in-memory ones for tests
//! - **Services**: orchestration on top of the ports
//!
//! # Modules
//!
//! - [`config`]: course configuration file
//! - [`roster`]: students, mentors and group repositories
//! - [`operator`]: confirmation policy and eligibility filter
//! - [`forge`]: remote repository hosting
//! - [`vcs`]: local git operations
//! - [`template`]: placeholder rendering and issue plans
//! - [`assignment`]: the batch workflows
//! - [`toolbox`]: grading helpers

pub mod assignment;
pub mod config;
pub mod forge;
pub mod operator;
pub mod roster;
pub mod template;
pub mod toolbox;
pub mod vcs;
