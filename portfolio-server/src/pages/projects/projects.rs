//! Page handlers for the project CRUD routes.
//!
//! Every handler follows the same shape: validate inputs, one repository
//! call, render a view or redirect. Failures become `PageError` and render
//! the error view; nothing bubbles past here.

use crate::pages::error::Result as PageResult;
use crate::pages::projects::create_project_form::CreateProjectForm;
use crate::pages::projects::edit_project_form::EditProjectForm;
use crate::state::AppState;
use crate::views::{
    self, create_page::CreatePage, edit_page::EditPage, index_page::IndexPage,
    not_found_page::NotFoundPage, show_page::ShowPage, tags_page::TagsPage,
};

use portfolio_core::NewProject;
use portfolio_db::ProjectRepository;

use askama::Template;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use log::{info, warn};

/// GET /
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> PageResult<Html<String>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.list_all().await?;

    info!("Rendering all projects ({} total)", projects.len());
    views::render(&IndexPage { projects })
}

/// GET /create
///
/// Serve the blank create form
pub async fn create_form() -> PageResult<Html<String>> {
    views::render(&CreatePage)
}

/// POST /create
///
/// Validate the form, fetch a placeholder image, persist, redirect to /
pub async fn create_project(
    State(state): State<AppState>,
    Form(form): Form<CreateProjectForm>,
) -> PageResult<Response> {
    let fields = form.validate()?;

    // The whole create fails if no placeholder image can be fetched
    let image = state.images.random_image_url().await?;

    let draft = NewProject::new(
        image,
        fields.name,
        fields.description,
        fields.duration,
        fields.tags,
    )?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.create(draft).await?;

    info!("Saved new project {} ({})", project.name, project.id);
    Ok(Redirect::to("/").into_response())
}

/// GET /show/{id}
///
/// Detail page for one project
pub async fn show_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.get_by_id(&id).await?;

    info!("Showing project {}", project.id);
    views::render(&ShowPage { project })
}

/// GET /tags/{tag}
///
/// Projects filtered by a single tag
pub async fn projects_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> PageResult<Html<String>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_by_tag(&tag).await?;

    info!("Filtering projects by tag {:?} ({} match)", tag, projects.len());
    views::render(&TagsPage { tag, projects })
}

/// GET /edit/{id}
///
/// Serve the edit form, pre-filled
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.get_by_id(&id).await?;

    info!("Serving edit form for project {}", project.id);
    views::render(&EditPage::from(project))
}

/// PATCH /edit/{id} (POST is accepted too, for plain HTML forms)
///
/// Update description and tags, redirect to the show page
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<EditProjectForm>,
) -> PageResult<Response> {
    let fields = form.validate()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .update_description_and_tags(&id, &fields.description, &fields.tags)
        .await?;

    info!("Updated project {}", project.id);
    Ok(Redirect::to(&format!("/show/{}", project.id)).into_response())
}

/// GET /delete/{id}
///
/// Delete the project, redirect to /
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Response> {
    let repo = ProjectRepository::new(state.pool.clone());
    repo.delete_by_id(&id).await?;

    info!("Deleted project {}", id);
    Ok(Redirect::to("/").into_response())
}

/// Fallback for any unmatched path
pub async fn not_found() -> Response {
    warn!("Page not found");

    match NotFoundPage.render() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => {
            log::error!("Failed to render not-found view: {}", e);
            (StatusCode::NOT_FOUND, "Page not found").into_response()
        }
    }
}
