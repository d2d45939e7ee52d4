//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "revu";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "revu";

/// Default catalog backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and merged with CLI args.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Catalog backend base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable the delete key on product cards.
    #[serde(default)]
    pub enable_delete: bool,

    /// Per-request timeout in seconds. Requests never time out when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint footer.
    #[serde(default = "default_true")]
    pub show_help: bool,

    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help: true,
            accent_color: default_accent_color(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(enable_delete) = args.enable_delete {
            self.enable_delete = enable_delete;
        }
        if let Some(timeout) = args.request_timeout {
            self.request_timeout_secs = Some(timeout);
        }
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("revu.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            api_url: default_api_url(),
            log_level: LogLevel::Info,
            enable_delete: false,
            request_timeout_secs: None,
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            api_url = "http://catalog.internal:8080/api"
            log_level = "debug"
            enable_delete = true
            request_timeout_secs = 15

            [ui]
            show_help = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_url, "http://catalog.internal:8080/api");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.enable_delete);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert!(!config.ui.show_help);
        assert_eq!(config.ui.accent_color, "Cyan");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert!(!config.enable_delete);
        assert!(config.request_timeout().is_none());
        assert!(config.ui.show_help);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("Failed to parse config");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = AppConfig {
            request_timeout_secs: Some(0),
            ..AppConfig::default()
        };
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            api_url: Some("http://example.test/api".to_string()),
            log_path: None,
            log_level: Some(LogLevel::Trace),
            enable_delete: Some(true),
            request_timeout: None,
        };

        config.merge_with_args(args);

        assert_eq!(config.api_url, "http://example.test/api");
        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(config.enable_delete);
        assert!(config.request_timeout().is_none());
    }
}
