use portfolio_core::Project;

use askama::Template;

/// Detail page for a single project.
#[derive(Template)]
#[template(path = "show.html")]
pub struct ShowPage {
    pub project: Project,
}
