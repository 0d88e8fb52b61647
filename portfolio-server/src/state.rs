use crate::image::ImageClient;

use sqlx::SqlitePool;

/// Shared application state for page handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub images: ImageClient,
}
