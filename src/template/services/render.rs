//! Single-string rendering.

use crate::template::domain::{RepoContext, TemplateError, TemplateResult};
use minijinja::Environment;

/// Renders `template` against the repository placeholders.
///
/// # Errors
///
/// Returns [`TemplateError::Render`] for syntax errors or failing
/// expressions.
pub fn render_text(template: &str, context: &RepoContext<'_>) -> TemplateResult<String> {
    Environment::new()
        .render_str(template, context)
        .map_err(|err| TemplateError::Render {
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use crate::roster::domain::{GroupName, Person, RepoName, StudentRepo};
    use crate::template::domain::RepoContext;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> StudentRepo {
        StudentRepo::new(
            RepoName::new("course-alpha").expect("valid name"),
            GroupName::canonicalize("alpha"),
        )
        .with_students([
            Person::new("alice").expect("valid username"),
            Person::new("bob").expect("valid username"),
        ])
        .with_mentors([Person::new("mia").expect("valid username")])
    }

    #[rstest]
    fn exposes_clone_url_group_and_people(repo: StudentRepo) {
        let context = RepoContext::new("git@forge:course/course-alpha.git", &repo);

        let rendered = render_text(
            "{{ group }} @ {{ clone_url }}: \
             {% for s in students %}{{ s.username }} {% endfor %}/ {{ mentors[0].username }}",
            &context,
        )
        .expect("template renders");

        assert_eq!(
            rendered,
            "alpha @ git@forge:course/course-alpha.git: alice bob / mia"
        );
    }

    #[rstest]
    fn syntax_errors_are_reported(repo: StudentRepo) {
        let context = RepoContext::new("url", &repo);

        let result = render_text("{% for %}", &context);

        assert!(result.is_err());
    }
}
