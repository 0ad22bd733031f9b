//! Course configuration.
//!
//! A course is described by one YAML file (`classforge.yaml` by default)
//! naming the forge organisation, the roster files, and the group-size
//! expectations used by the eligibility filter.

mod course;
mod error;

pub use course::{CourseConfig, DEFAULT_API_URL, DEFAULT_CONFIG_FILE};
pub use error::{ConfigError, ConfigResult};
