use askama::Template;

/// Blank create-project form.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreatePage;
