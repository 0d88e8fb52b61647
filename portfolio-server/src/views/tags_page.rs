use portfolio_core::Project;

use askama::Template;

/// Projects filtered down to a single tag.
#[derive(Template)]
#[template(path = "tags.html")]
pub struct TagsPage {
    pub tag: String,
    pub projects: Vec<Project>,
}
