use std::env;

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ConfigError;
use crate::utils::config::AppEnv;
use crate::utils::constant::{APP_NAME, DEFAULT_LOG_FILTER};

/// Builds the log filter from a `RUST_LOG` value, or [`DEFAULT_LOG_FILTER`] when unset.
///
/// An invalid value is an error rather than a silent fallback.
pub fn build_filter(rust_log: Option<&str>) -> Result<EnvFilter, ConfigError> {
    let directives = rust_log.unwrap_or(DEFAULT_LOG_FILTER);

    EnvFilter::try_new(directives)
        .map_err(|e| ConfigError::Logging(format!("invalid log filter `{directives}`: {e}")))
}

/// Installs the global tracing subscriber.
///
/// Production emits bunyan-formatted JSON on stdout; development emits
/// human-readable lines.
pub fn init_tracing(app_env: AppEnv) -> Result<(), ConfigError> {
    let filter = build_filter(env::var("RUST_LOG").ok().as_deref())?;

    let result = match app_env {
        AppEnv::Production => Registry::default()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(APP_NAME.into(), std::io::stdout))
            .try_init(),
        AppEnv::Development => Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
