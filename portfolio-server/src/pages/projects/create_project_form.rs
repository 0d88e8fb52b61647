use crate::pages::error::{PageError, Result as PageResult};
use crate::pages::projects::required_field;

use portfolio_core::normalize_tags;

use serde::Deserialize;

/// Form body posted by the create view. Field names match the template inputs.
#[derive(Debug, Deserialize)]
pub struct CreateProjectForm {
    #[serde(rename = "projectName", default)]
    pub name: Option<String>,

    #[serde(rename = "projectDescription", default)]
    pub description: Option<String>,

    #[serde(rename = "projectDuration", default)]
    pub duration: Option<String>,

    #[serde(rename = "projectTag1", default)]
    pub tag1: Option<String>,

    #[serde(rename = "projectTag2", default)]
    pub tag2: Option<String>,
}

/// Create fields after minimal validation, before the image URL is known.
#[derive(Debug)]
pub struct CreateProjectFields {
    pub name: String,
    pub description: String,
    pub duration: f64,
    pub tags: Vec<String>,
}

impl CreateProjectForm {
    /// Check the required fields and parse the duration.
    pub fn validate(self) -> PageResult<CreateProjectFields> {
        let name = required_field(self.name, "projectName")?;
        let description = required_field(self.description, "projectDescription")?;
        let duration = required_field(self.duration, "projectDuration")?;

        let duration: f64 = duration
            .parse()
            .map_err(|_| PageError::validation("projectDuration must be a number"))?;
        if !duration.is_finite() || duration < 0.0 {
            return Err(PageError::validation(
                "projectDuration must be a non-negative number",
            ));
        }

        Ok(CreateProjectFields {
            name,
            description,
            duration,
            tags: normalize_tags(vec![
                self.tag1.unwrap_or_default(),
                self.tag2.unwrap_or_default(),
            ]),
        })
    }
}
