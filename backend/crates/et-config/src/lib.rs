mod assets_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use assets_config::AssetsConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

// Server
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

// Database
pub const DEFAULT_DATABASE_FILENAME: &str = "data.db";
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
pub const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
pub const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

// Logging
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_DIRECTORY: &str = "log";
pub const DEFAULT_LOG_COLORED: bool = true;

// Assets
pub const DEFAULT_VIEWS_DIRECTORY: &str = "views";
pub const DEFAULT_PUBLIC_DIRECTORY: &str = "public";

// Environment
pub const CONFIG_DIR_ENV: &str = "ET_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".et";
