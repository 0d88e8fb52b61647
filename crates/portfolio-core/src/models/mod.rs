pub mod new_project;
pub mod project;
