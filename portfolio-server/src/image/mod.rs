pub mod client;
pub mod error;

pub use client::ImageClient;
pub use error::{ImageError, Result};
