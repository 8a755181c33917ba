use qurl::app;
use qurl::error::ConfigError;
use qurl::utils::{config::AppConfig, telemetry::init_tracing};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.app_env)?;
    info!(app_env = ?config.app_env, "Configuration loaded");

    let app = app();

    let listener = TcpListener::bind(config.bind_address).await?;
    info!(address = %config.bind_address, "Server starting");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
