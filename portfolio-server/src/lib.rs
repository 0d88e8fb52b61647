pub mod error;
pub mod health;
pub mod image;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod state;
pub mod views;

pub use pages::{
    error::{PageError, Result as PageResult},
    projects::{
        create_project_form::CreateProjectForm,
        edit_project_form::EditProjectForm,
        projects::{
            create_form, create_project, delete_project, edit_form, list_projects, not_found,
            projects_by_tag, show_project, update_project,
        },
    },
};

pub use crate::image::ImageClient;
pub use crate::routes::build_router;
pub use crate::state::AppState;
