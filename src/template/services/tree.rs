//! Rendering of `*.jinja` files inside a source checkout.

use super::render::render_text;
use crate::template::domain::{RepoContext, TemplateError, TemplateResult};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;
use tracing::{debug, error};

/// Suffix marking a file as a template.
pub const TEMPLATE_SUFFIX: &str = ".jinja";

/// Renders every `*.jinja` file under `root`, skipping `.git`.
///
/// Each template is replaced by its rendered output under the same name
/// without the suffix. Files are processed in path order and the written
/// paths (relative to `root`) are returned in that order.
///
/// # Errors
///
/// Returns [`TemplateError::Walk`] when the tree cannot be listed and
/// [`TemplateError::File`] naming the template and clone URL when a file
/// cannot be rendered or written. Files rendered before the failure stay
/// rendered.
pub fn render_tree(root: &Utf8Path, context: &RepoContext<'_>) -> TemplateResult<Vec<Utf8PathBuf>> {
    let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(walk_error(root))?;
    let mut templates = Vec::new();
    collect_templates(&dir, root, Utf8Path::new(""), &mut templates)?;
    templates.sort();

    let mut written = Vec::with_capacity(templates.len());
    for relative in templates {
        match render_file(&dir, &relative, context) {
            Ok(destination) => {
                debug!(template = %relative, %destination, "rendered template");
                written.push(destination);
            }
            Err(reason) => {
                let path = root.join(&relative);
                error!(%path, clone_url = context.clone_url, %reason, "problem generating template");
                return Err(TemplateError::File {
                    path,
                    clone_url: context.clone_url.to_owned(),
                    reason,
                });
            }
        }
    }
    Ok(written)
}

fn walk_error(path: &Utf8Path) -> impl Fn(std::io::Error) -> TemplateError + '_ {
    move |err| TemplateError::Walk {
        path: path.to_owned(),
        source: Arc::new(err),
    }
}

fn collect_templates(
    dir: &Dir,
    root: &Utf8Path,
    prefix: &Utf8Path,
    found: &mut Vec<Utf8PathBuf>,
) -> TemplateResult<()> {
    let here = root.join(prefix);
    for item in dir.entries().map_err(walk_error(&here))? {
        let entry = item.map_err(walk_error(&here))?;
        let name = entry.file_name().map_err(walk_error(&here))?;
        let file_type = entry.file_type().map_err(walk_error(&here))?;
        let relative = prefix.join(&name);
        if file_type.is_dir() {
            if name == ".git" {
                continue;
            }
            let child = entry.open_dir().map_err(walk_error(&here))?;
            collect_templates(&child, root, &relative, found)?;
        } else if file_type.is_file() && name.ends_with(TEMPLATE_SUFFIX) {
            found.push(relative);
        }
    }
    Ok(())
}

fn render_file(
    dir: &Dir,
    relative: &Utf8Path,
    context: &RepoContext<'_>,
) -> Result<Utf8PathBuf, String> {
    let destination = relative
        .as_str()
        .strip_suffix(TEMPLATE_SUFFIX)
        .map(Utf8PathBuf::from)
        .ok_or_else(|| format!("{relative} has no {TEMPLATE_SUFFIX} suffix"))?;
    let source = dir.read_to_string(relative).map_err(|err| err.to_string())?;
    let rendered = render_text(&source, context).map_err(|err| err.to_string())?;
    dir.write(&destination, rendered)
        .map_err(|err| err.to_string())?;
    dir.remove_file(relative).map_err(|err| err.to_string())?;
    Ok(destination)
}
