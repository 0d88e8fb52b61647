use crate::{CoreError, Result as CoreErrorResult};

/// Draft for a project about to be created.
///
/// Construct with [`NewProject::new`] to get the field checks; `validate`
/// re-runs them for drafts assembled field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub image: String,
    pub name: String,
    pub description: String,
    pub duration: f64,
    pub tags: Vec<String>,
}

impl NewProject {
    /// Build a validated draft. Blank tag slots are dropped.
    #[track_caller]
    pub fn new(
        image: String,
        name: String,
        description: String,
        duration: f64,
        tags: Vec<String>,
    ) -> CoreErrorResult<Self> {
        let draft = Self {
            image,
            name,
            description,
            duration,
            tags: normalize_tags(tags),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Check the persisted-project invariants: non-empty image, name, and
    /// description, and a finite non-negative duration.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::validation("description is required"));
        }
        if self.image.trim().is_empty() {
            return Err(CoreError::validation("image is required"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(CoreError::validation(
                "duration must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Drop blank tag entries, keeping submission order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
