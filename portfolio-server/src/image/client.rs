//! Client for the placeholder-image listing service (picsum-compatible).

use crate::image::{ImageError, Result as ImageResult};

use portfolio_config::ImageConfig;

use log::debug;
use rand::Rng;
use serde::Deserialize;

/// One entry of the service's listing. Only the download URL is used.
#[derive(Debug, Deserialize)]
pub struct ImageEntry {
    pub download_url: String,
}

/// HTTP client for the image listing endpoint.
///
/// The base URL is injectable so tests can point it at a mock server.
#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    base_url: String,
    page: u32,
    limit: u32,
}

impl ImageClient {
    pub fn new(base_url: &str, page: u32, limit: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            page,
            limit,
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(&config.base_url, config.page, config.limit)
    }

    /// Fetch the listing and pick one entry's download URL at random.
    pub async fn random_image_url(&self) -> ImageResult<String> {
        let url = format!(
            "{}/v2/list?page={}&limit={}",
            self.base_url, self.page, self.limit
        );

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::status(status.as_u16()));
        }

        let mut entries: Vec<ImageEntry> = response.json().await.map_err(ImageError::decode)?;
        if entries.is_empty() {
            return Err(ImageError::empty_listing());
        }

        let index = rand::rng().random_range(0..entries.len());
        debug!("Picked image {} of {} from listing", index + 1, entries.len());

        Ok(entries.swap_remove(index).download_url)
    }
}
