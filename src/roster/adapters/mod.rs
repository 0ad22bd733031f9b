//! Roster provider implementations.

pub mod csv;
pub mod memory;

pub use csv::{CsvRoster, FieldMapping, PersonSource};
pub use memory::InMemoryRoster;
