//! Operator interaction: confirmations between repositories.
//!
//! Every per-repository action is gated by the batch confirmation policy
//! (proceed / proceed for all / skip / abort) and, for workflows that create
//! things, by the eligibility filter that asks about groups whose size does
//! not match the course expectation. Console input is a port so the
//! workflows can be driven by a scripted operator in tests.
//!
//! - Domain types in [`domain`]
//! - Prompt contract in [`ports`]
//! - Console and scripted prompts in [`adapters`]
//! - Confirmation policy and eligibility filter in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
