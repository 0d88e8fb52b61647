use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_LIMIT,
    DEFAULT_IMAGE_PAGE, MAX_IMAGE_LIMIT,
};

use serde::Deserialize;

/// Settings for the placeholder-image listing service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub base_url: String,
    /// Listing page requested from the service
    pub page: u32,
    /// Number of entries requested per listing
    pub limit: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IMAGE_BASE_URL),
            page: DEFAULT_IMAGE_PAGE,
            limit: DEFAULT_IMAGE_LIMIT,
        }
    }
}

impl ImageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::image(format!(
                "image.base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }

        if self.page == 0 {
            return Err(ConfigError::image("image.page must be >= 1"));
        }

        if self.limit == 0 || self.limit > MAX_IMAGE_LIMIT {
            return Err(ConfigError::image(format!(
                "image.limit must be 1-{}, got {}",
                MAX_IMAGE_LIMIT, self.limit
            )));
        }

        Ok(())
    }
}
