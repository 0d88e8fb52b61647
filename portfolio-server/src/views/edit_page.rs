use portfolio_core::Project;

use askama::Template;

/// Edit form, pre-filled from the stored project.
///
/// The two tag slots are flattened out of the tag list so the template
/// stays a plain value lookup.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPage {
    pub project: Project,
    pub tag1: String,
    pub tag2: String,
}

impl From<Project> for EditPage {
    fn from(project: Project) -> Self {
        let tag1 = project.tags.first().cloned().unwrap_or_default();
        let tag2 = project.tags.get(1).cloned().unwrap_or_default();
        Self {
            project,
            tag1,
            tag2,
        }
    }
}
