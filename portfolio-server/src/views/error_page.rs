use askama::Template;

/// User-facing error view; rendered by `PageError::into_response`.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub message: String,
}
