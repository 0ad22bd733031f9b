//! Loading issue plans from disk.

use crate::template::domain::{IssuePlan, IssuePlanError, IssuePlanResult};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

/// Reads and parses the YAML issue plan at `path`.
///
/// # Errors
///
/// Returns [`IssuePlanError`] when the file is missing, unreadable or not a
/// valid plan.
pub fn load_issue_plan(path: &Utf8Path) -> IssuePlanResult<IssuePlan> {
    let file_name = path
        .file_name()
        .ok_or_else(|| IssuePlanError::NotFound(path.to_owned()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let read_error = |err: std::io::Error| {
        if err.kind() == std::io::ErrorKind::NotFound {
            IssuePlanError::NotFound(path.to_owned())
        } else {
            IssuePlanError::Read {
                path: path.to_owned(),
                source: Arc::new(err),
            }
        }
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    IssuePlan::parse(&contents)
}
