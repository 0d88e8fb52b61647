//! Project repository for CRUD operations on the projects table.
//!
//! Identifiers cross this boundary as raw strings: the repository owns the
//! id-shape check, so a malformed id is an `InvalidId` error and a
//! well-formed id with no matching row is `NotFound`. Tags are stored as a
//! JSON array in a TEXT column and matched with SQLite's `json_each`.

use crate::{DbError, Result as DbErrorResult};

use portfolio_core::{ErrorLocation, NewProject, Project, parse_project_id};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const PROJECT_COLUMNS: &str = "id, image, name, description, duration, tags, created_at, updated_at";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All projects in insertion order.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_project).collect()
    }

    /// Single project by id.
    pub async fn get_by_id(&self, id: &str) -> DbErrorResult<Project> {
        let project_id = parse_project_id(id)?;

        self.fetch(project_id).await?.ok_or_else(|| DbError::NotFound {
            id: project_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Exactly the projects whose tag set contains `tag`, insertion order.
    pub async fn find_by_tag(&self, tag: &str) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            r#"
                SELECT {PROJECT_COLUMNS} FROM projects
                WHERE EXISTS (
                    SELECT 1 FROM json_each(projects.tags)
                    WHERE json_each.value = ?
                )
                ORDER BY rowid
            "#
        ))
        .bind(tag)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_project).collect()
    }

    /// Insert a new project from a draft and return the stored entity.
    pub async fn create(&self, draft: NewProject) -> DbErrorResult<Project> {
        draft.validate()?;

        let project = Project::from_draft(draft);
        let id = project.id.to_string();
        let tags = encode_tags(&project.tags)?;
        let created_at = project.created_at.timestamp();
        let updated_at = project.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, image, name, description, duration, tags,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&project.image)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.duration)
        .bind(&tags)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(project)
    }

    /// Update only the description and tags of an existing project.
    pub async fn update_description_and_tags(
        &self,
        id: &str,
        description: &str,
        tags: &[String],
    ) -> DbErrorResult<Project> {
        let project_id = parse_project_id(id)?;

        if description.trim().is_empty() {
            return Err(DbError::Validation {
                message: "description is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id_str = project_id.to_string();
        let tags_json = encode_tags(tags)?;
        let updated_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET description = ?, tags = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(description)
        .bind(&tags_json)
        .bind(updated_at)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id: id_str,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.fetch(project_id).await?.ok_or_else(|| DbError::NotFound {
            id: id_str,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Remove a project.
    pub async fn delete_by_id(&self, id: &str) -> DbErrorResult<()> {
        let project_id = parse_project_id(id)?;
        let id_str = project_id.to_string();

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id: id_str,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    async fn fetch(&self, project_id: Uuid) -> DbErrorResult<Option<Project>> {
        let id_str = project_id.to_string();

        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(decode_project).transpose()
    }
}

fn encode_tags(tags: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(tags).map_err(|e| DbError::Decode {
        message: format!("Failed to encode project.tags: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn decode_project(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| DbError::Decode {
        message: format!("Invalid UUID in project.id: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let tags: String = row.try_get("tags")?;
    let tags: Vec<String> = serde_json::from_str(&tags).map_err(|e| DbError::Decode {
        message: format!("Invalid JSON in project.tags: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let created_at: i64 = row.try_get("created_at")?;
    let created_at = DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
        message: "Invalid timestamp in project.created_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let updated_at: i64 = row.try_get("updated_at")?;
    let updated_at = DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::Decode {
        message: "Invalid timestamp in project.updated_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Project {
        id,
        image: row.try_get("image")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        duration: row.try_get("duration")?,
        tags,
        created_at,
        updated_at,
    })
}
