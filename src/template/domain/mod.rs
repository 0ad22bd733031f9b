//! Template values and errors.

mod context;
mod error;
mod plan;

pub use context::RepoContext;
pub use error::{IssuePlanError, IssuePlanResult, TemplateError, TemplateResult};
pub use plan::{IssueEntry, IssuePlan, IssueTemplate, MilestoneEntry, parse_due_date};
