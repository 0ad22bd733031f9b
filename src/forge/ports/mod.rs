//! Port contracts for the forge.

pub mod forge;

pub use forge::{Forge, ForgeError, ForgeResult};
