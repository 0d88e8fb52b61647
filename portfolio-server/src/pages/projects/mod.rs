pub mod create_project_form;
pub mod edit_project_form;
pub mod projects;

use crate::pages::error::{PageError, Result as PageResult};

/// Reject missing or blank form fields.
pub(crate) fn required_field(value: Option<String>, field: &str) -> PageResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(PageError::validation(format!("{} is required", field))),
    }
}
