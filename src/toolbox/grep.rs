//! `util grep-in`.

use super::{ToolboxError, ToolboxResult};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Returns every line of `path` containing one of the comma-separated
/// `needles`, trimmed, in file order.
///
/// # Errors
///
/// Returns [`ToolboxError::Io`] when the file cannot be read.
pub fn grep_in(path: &Utf8Path, needles: &str) -> ToolboxResult<Vec<String>> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().unwrap_or(path.as_str());
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(ToolboxError::io(parent))?;
    let contents = dir.read_to_string(file_name).map_err(ToolboxError::io(path))?;

    let wanted: Vec<&str> = needles.split(',').filter(|needle| !needle.is_empty()).collect();
    Ok(contents
        .lines()
        .filter(|line| wanted.iter().any(|needle| line.contains(needle)))
        .map(|line| line.trim().to_owned())
        .collect())
}
