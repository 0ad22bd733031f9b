//! `util branches-to-folders`.

use super::{ToolboxError, ToolboxResult};
use crate::vcs::ports::VersionControl;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::{debug, info};

/// Directory receiving the expanded copies of `source`.
#[must_use]
pub fn expanded_root(source: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{}.expanded", source.as_str().trim_end_matches('/')))
}

/// Copies the work tree of every local branch of `source` into
/// `<source>.expanded/<branch>/`, leaving `.git` behind.
///
/// Each branch is checked out in `source` before it is copied, so the
/// checkout is left on the last branch. Returns the created folders.
///
/// # Errors
///
/// Returns [`ToolboxError::Io`] when `<source>.expanded` already exists or a
/// copy fails, and [`ToolboxError::Vcs`] when git fails.
pub async fn branches_to_folders<V>(vcs: &V, source: &Utf8Path) -> ToolboxResult<Vec<Utf8PathBuf>>
where
    V: VersionControl + ?Sized,
{
    let branches = vcs.list_branches(source).await?;
    let target = expanded_root(source);
    let target_dir = create_fresh_dir(&target)?;

    let mut created = Vec::with_capacity(branches.len());
    for branch in &branches {
        vcs.checkout(source, branch).await?;
        let source_dir = Dir::open_ambient_dir(source, ambient_authority())
            .map_err(ToolboxError::io(source))?;
        target_dir
            .create_dir_all(branch)
            .map_err(ToolboxError::io(target.join(branch)))?;
        let branch_dir = target_dir
            .open_dir(branch)
            .map_err(ToolboxError::io(target.join(branch)))?;
        copy_tree(&source_dir, &branch_dir, source)?;
        info!(%branch, folder = %target.join(branch), "expanded branch");
        created.push(target.join(branch));
    }
    Ok(created)
}

fn create_fresh_dir(path: &Utf8Path) -> ToolboxResult<Dir> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path.file_name().unwrap_or(path.as_str());
    let parent_dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(ToolboxError::io(parent))?;
    parent_dir.create_dir(name).map_err(ToolboxError::io(path))?;
    parent_dir.open_dir(name).map_err(ToolboxError::io(path))
}

fn copy_tree(from: &Dir, to: &Dir, location: &Utf8Path) -> ToolboxResult<()> {
    for item in from.entries().map_err(ToolboxError::io(location))? {
        let entry = item.map_err(ToolboxError::io(location))?;
        let name = entry.file_name().map_err(ToolboxError::io(location))?;
        let path = location.join(&name);
        let file_type = entry.file_type().map_err(ToolboxError::io(&path))?;
        if file_type.is_dir() {
            if name == ".git" {
                continue;
            }
            to.create_dir(&name).map_err(ToolboxError::io(&path))?;
            let child_from = entry.open_dir().map_err(ToolboxError::io(&path))?;
            let child_to = to.open_dir(&name).map_err(ToolboxError::io(&path))?;
            copy_tree(&child_from, &child_to, &path)?;
        } else if file_type.is_file() {
            from.copy(&name, to, &name).map_err(ToolboxError::io(&path))?;
        } else {
            debug!(%path, "skipping special file");
        }
    }
    Ok(())
}
