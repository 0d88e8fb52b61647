mod config;
mod database_config;
mod error;
mod image_config;
mod log_level;
mod logging_config;
mod server_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use image_config::ImageConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_FILENAME: &str = "portfolio.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos";
const DEFAULT_IMAGE_PAGE: u32 = 1;
const DEFAULT_IMAGE_LIMIT: u32 = 100;
const MIN_PORT: u16 = 1024;
const MAX_IMAGE_LIMIT: u32 = 500;
