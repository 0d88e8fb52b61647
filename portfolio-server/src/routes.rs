use crate::health;
use crate::pages::projects::projects::{
    create_form, create_project, delete_project, edit_form, list_projects, not_found,
    projects_by_tag, show_project, update_project,
};
use crate::state::AppState;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Project pages
        .route("/", get(list_projects))
        .route("/create", get(create_form).post(create_project))
        .route("/show/{id}", get(show_project))
        .route("/tags/{tag}", get(projects_by_tag))
        .route(
            "/edit/{id}",
            get(edit_form).patch(update_project).post(update_project),
        )
        .route("/delete/{id}", get(delete_project))
        // Health check endpoint
        .route("/health", get(health::health))
        // Catch-all for unmatched paths
        .fallback(not_found)
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
