mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

const DEFAULT_LOG_FILTER: &str = "translator_backend=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = load_config();

    // Initialize app state
    let app_state = AppState::new(config.clone())?;

    let app = routes::create_app(app_state);

    // Start server
    let host: std::net::IpAddr = config
        .system_config
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host {}: {}", config.system_config.host, e))?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting translator backend on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Try `CONFIG_PATH` and the usual file names; fall back to built-in defaults.
fn load_config() -> Config {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.yml".to_string()),
        Some("conf.json".to_string()),
    ].into_iter().flatten().collect();

    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                return cfg;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    warn!("No usable config file found (tried {:?}), using defaults", config_paths);
    Config::default()
}
