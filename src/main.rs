use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use revu::application::use_cases::CatalogController;
use revu::infrastructure::config::ConfigSource;
use revu::infrastructure::{AppConfig, CliArgs, RestCatalogClient, StorageManager};
use revu::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigSource)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let (mut config, source) = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, source))
}

fn create_app() -> Result<App> {
    let (config, source) = load_config()?;

    init_logging(&config)?;
    source.log();

    info!(version = revu::VERSION, api_url = %config.api_url, "Starting Revu");

    let client = RestCatalogClient::with_timeout(&config.api_url, config.request_timeout())?;
    let controller = CatalogController::new(Arc::new(client));

    Ok(App::new(controller, &config))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
