pub mod error;
pub mod error_location;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_project::{NewProject, normalize_tags};
pub use models::project::{Project, parse_project_id};

#[cfg(test)]
mod tests;
