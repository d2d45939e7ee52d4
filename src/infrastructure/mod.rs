//! Infrastructure layer with external service adapters.

/// Catalog REST client.
pub mod api;
/// Application configuration.
pub mod config;

pub use api::RestCatalogClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
