use askama::Template;

/// Catch-all page for unmatched routes.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage;
