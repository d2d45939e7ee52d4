//! Application configuration.

/// Configuration values and defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Configuration file loading.
pub mod storage;

pub use app_config::{AppConfig, DEFAULT_API_URL, LogLevel, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigSource, StorageManager};
