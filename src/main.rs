use relay_lib::config::{self, models::RelayConfig};
use relay_lib::{routes, state::AppState};
use std::sync::Arc;
use tracing::{Level, error, info};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_PORT: &str = "3000";

fn load_initial_config() -> anyhow::Result<RelayConfig> {
    let config_path =
        std::env::var("CONFIG_FILE_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        config::load_config(&config_path).map_err(|e| {
            anyhow::anyhow!("Failed to load configuration from {}: {}", config_path, e)
        })?
    } else {
        info!(
            "No configuration file at {}; falling back to environment variables",
            config_path
        );
        RelayConfig::from_env()
    };

    if let Err(val_errors) = config::validation::validate_relay_config(&config) {
        error!("Configuration is invalid: {:?}. Halting.", val_errors);
        return Err(anyhow::anyhow!("Invalid config: {:?}", val_errors));
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Mistral relay...");

    let config = load_initial_config()?;
    let app_state = Arc::new(AppState::new(config));
    info!(
        "Relaying chat completions to provider '{}' at {}",
        app_state.provider.name(),
        app_state.config.upstream.endpoint
    );

    let app = routes::create_router(app_state);

    let port_str = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port_str))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", port_str, e))?;

    info!("Server is running on port {}", port_str);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
