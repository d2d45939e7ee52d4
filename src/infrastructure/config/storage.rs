use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failure locating or reading the configuration file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How the configuration file was resolved.
///
/// Config is read before logging is installed, so the outcome is returned
/// and logged later with [`ConfigSource::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file at the path; defaults were used.
    Missing(PathBuf),
    /// The file was parsed.
    File(PathBuf),
    /// The file could not be parsed; defaults were used.
    Invalid {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl ConfigSource {
    /// Emits the load outcome to the active subscriber.
    pub fn log(&self) {
        match self {
            Self::Missing(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
            }
            Self::File(path) => {
                info!(path = %path.display(), "Config file loaded");
            }
            Self::Invalid { path, message } => {
                warn!(
                    path = %path.display(),
                    error = %message,
                    "Failed to parse config file, using defaults"
                );
            }
        }
    }
}

/// Locates and reads the configuration file. Never writes to disk.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration.
    ///
    /// A missing or unparsable file yields defaults; the returned
    /// [`ConfigSource`] says which.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, ConfigSource), ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            return Ok((AppConfig::default(), ConfigSource::Missing(config_path)));
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(mut config) => {
                config.config = Some(config_path.clone());
                Ok((config, ConfigSource::File(config_path)))
            }
            Err(e) => {
                let mut config = AppConfig::default();
                config.config = Some(config_path.clone());
                Ok((
                    config,
                    ConfigSource::Invalid {
                        path: config_path,
                        message: e.message().to_string(),
                    },
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let (config, source) = storage.load_config(None).unwrap();

        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(
            source,
            ConfigSource::Missing(dir.path().join(CONFIG_FILE_NAME))
        );
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reads_config_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "api_url = \"http://10.0.0.2:5000/api\"\nenable_delete = true\n",
        )
        .unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let (config, source) = storage.load_config(None).unwrap();

        assert_eq!(source, ConfigSource::File(dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(config.api_url, "http://10.0.0.2:5000/api");
        assert!(config.enable_delete);
        assert_eq!(config.config, Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_path_override() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "log_level = \"warn\"\n").unwrap();
        let storage = StorageManager::with_dir(dir.path().join("unused"));

        let (config, _) = storage.load_config(Some(&custom)).unwrap();

        assert_eq!(config.log_level, crate::infrastructure::config::LogLevel::Warn);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "api_url = [not toml").unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let (config, source) = storage.load_config(None).unwrap();

        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert!(matches!(source, ConfigSource::Invalid { .. }));
    }

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_toml_warning_is_logged_after_subscriber_install() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "api_url = [not toml").unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let (_, source) = storage.load_config(None).unwrap();

        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || source.log());

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Failed to parse config file"));
        assert!(output.contains(CONFIG_FILE_NAME));
    }
}
