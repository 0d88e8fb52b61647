use portfolio_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failures talking to the placeholder-image listing service
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image service request failed: {source} {location}")]
    Request {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Image service returned status {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Image listing decode failed: {source} {location}")]
    Decode {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Image listing is empty {location}")]
    EmptyListing { location: ErrorLocation },
}

impl ImageError {
    #[track_caller]
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(source: reqwest::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_listing() -> Self {
        Self::EmptyListing {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ImageError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Request {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
