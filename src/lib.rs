pub mod api;
pub mod config;
pub mod cooldown;
pub mod db;
pub mod encouragement;
pub mod entries;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod mood;
pub mod settings;
pub mod store;
pub mod subscription;
mod utils;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::{Context, Result};
use log::info;

use api::AppState;
use config::AppConfig;
use db::Database;
use settings::SettingsStore;

fn init_logging(debug: bool) {
    let default_level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG, when set, takes precedence over the default level.
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();
}

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(config.debug);

    info!("Vibepoint starting up...");

    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!("failed to create data directory {}", config.data_dir.display())
    })?;

    let settings = SettingsStore::new(config.settings_path())?;
    let limits = settings.limits();
    info!(
        "Loaded settings from {}: cooldown {} entries / {} min, patterns unlock at {}",
        settings.path().display(),
        limits.cooldown.max_entries,
        limits.cooldown.window_minutes,
        limits.patterns_unlock_entries
    );

    let database = Database::new(config.db_path())?;
    info!("Using database at {}", database.path().display());

    let app = api::router(AppState::from_database(database, limits));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Vibepoint shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {err}");
    }
}
