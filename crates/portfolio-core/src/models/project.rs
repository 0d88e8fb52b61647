//! Project entity - a showcased work item.

use crate::{CoreError, NewProject, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project as persisted in the store.
///
/// Every persisted project has a non-empty image, name, and description and
/// a non-negative duration. Only the description and tags change after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// Placeholder image URL assigned at creation
    pub image: String,
    pub name: String,
    pub description: String,
    /// Duration in weeks, >= 0
    pub duration: f64,
    /// Free-text labels, 0-2 populated in practice
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project from a validated draft
    pub fn from_draft(draft: NewProject) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            image: draft.image,
            name: draft.name,
            description: draft.description,
            duration: draft.duration,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the project carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse a project identifier, rejecting malformed values.
#[track_caller]
pub fn parse_project_id(value: &str) -> CoreErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| CoreError::invalid_id(value))
}
