use portfolio_core::Project;

use askama::Template;

/// Landing page listing every project.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub projects: Vec<Project>,
}
