//! Course roster: students, mentors and the group-to-repository mapping.
//!
//! Every command starts by resolving the roster into an ordered list of
//! [`domain::StudentRepo`] values. The provider is a port so workflows can
//! run against a CSV-backed roster in production and an in-memory roster in
//! tests:
//!
//! - Domain values in [`domain`]
//! - Provider contract in [`ports`]
//! - CSV and in-memory providers in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
