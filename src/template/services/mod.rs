//! Rendering services.

mod plan_loader;
mod render;
mod tree;

pub use plan_loader::load_issue_plan;
pub use render::render_text;
pub use tree::{TEMPLATE_SUFFIX, render_tree};
