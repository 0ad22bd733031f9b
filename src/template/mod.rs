//! Placeholder rendering for source trees and issue plans.
//!
//! Templates are `minijinja` text rendered against a [`domain::RepoContext`]
//! exposing `clone_url`, `group`, `students` and `mentors`. The services
//! render single strings, whole source trees (`*.jinja` files) and load the
//! YAML issue plan consumed by `create-issues`.

pub mod domain;
pub mod services;
