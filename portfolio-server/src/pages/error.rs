//! Page error types
//!
//! Every request-time failure funnels into `PageError`, which renders the
//! user-facing error view with the mapped status code. Nothing propagates
//! past the handler boundary.

use crate::image::ImageError;
use crate::views::error_page::ErrorPage;

use portfolio_core::{CoreError, ErrorLocation};
use portfolio_db::DbError;

use std::panic::Location;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Page errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum PageError {
    /// Bad or missing form input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed project identifier (400)
    #[error("Invalid project id: {value} {location}")]
    InvalidId {
        value: String,
        location: ErrorLocation,
    },

    /// Well-formed id with no matching record (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Image service failure (500)
    #[error("Upstream service failed: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Unexpected failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl PageError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        PageError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        // Log with location before the user-facing message is flattened
        log::error!("{}", self);

        let (status, message) = match self {
            PageError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            PageError::InvalidId { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid project ID".to_string())
            }
            PageError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "Project not found".to_string())
            }
            PageError::Upstream { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Image service unavailable".to_string(),
            ),
            PageError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        };

        let page = ErrorPage { message };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                log::error!("Failed to render error view: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Convert repository errors to page errors
impl From<DbError> for PageError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::InvalidId { value, .. } => PageError::InvalidId {
                value,
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::NotFound { id, .. } => PageError::NotFound {
                message: format!("Project {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Validation { message, .. } => PageError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                PageError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert core validation errors to page errors
impl From<CoreError> for PageError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, .. } => PageError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidId { value, .. } => PageError::InvalidId {
                value,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert image service errors to page errors
impl From<ImageError> for PageError {
    #[track_caller]
    fn from(e: ImageError) -> Self {
        log::error!("Image service error: {}", e);
        PageError::Upstream {
            message: "Failed to fetch a placeholder image".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert template render errors to page errors
impl From<askama::Error> for PageError {
    #[track_caller]
    fn from(e: askama::Error) -> Self {
        PageError::Internal {
            message: format!("Template render failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
