use crate::pages::error::Result as PageResult;
use crate::pages::projects::required_field;

use portfolio_core::normalize_tags;

use serde::Deserialize;

/// Form body for the edit view. Only the description and tags are editable.
#[derive(Debug, Deserialize)]
pub struct EditProjectForm {
    #[serde(rename = "projectDescription", default)]
    pub description: Option<String>,

    #[serde(rename = "projectTag1", default)]
    pub tag1: Option<String>,

    #[serde(rename = "projectTag2", default)]
    pub tag2: Option<String>,
}

#[derive(Debug)]
pub struct EditProjectFields {
    pub description: String,
    pub tags: Vec<String>,
}

impl EditProjectForm {
    pub fn validate(self) -> PageResult<EditProjectFields> {
        let description = required_field(self.description, "projectDescription")?;

        Ok(EditProjectFields {
            description,
            tags: normalize_tags(vec![
                self.tag1.unwrap_or_default(),
                self.tag2.unwrap_or_default(),
            ]),
        })
    }
}
