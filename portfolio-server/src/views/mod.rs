//! Typed askama templates for every page the app renders.

pub mod create_page;
pub mod edit_page;
pub mod error_page;
pub mod index_page;
pub mod not_found_page;
pub mod show_page;
pub mod tags_page;

use crate::pages::error::Result as PageResult;

use askama::Template;
use axum::response::Html;

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> PageResult<Html<String>> {
    Ok(Html(template.render()?))
}
