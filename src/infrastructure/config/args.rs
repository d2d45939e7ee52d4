use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "revu",
    version,
    about = "A lightweight terminal client for a product review catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog backend base URL.
    #[arg(long, value_name = "URL", env = "REVU_API_URL")]
    pub api_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable deleting products from the catalog.
    #[arg(long)]
    pub enable_delete: Option<bool>,

    /// Request timeout in seconds (0 disables).
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,
}
