//! # Runtime Configuration
//!
//! Settings are read from the process environment, after `main` has loaded
//! an optional `.env` file through `dotenvy`.
//!
//! ## Environment Variables
//!
//! - `APP_ENV` - "production" or "development" (default). Selects the log format
//! - `BIND_ADDRESS` - Socket address to listen on (default [`DEFAULT_BIND_ADDRESS`])
//! - `RUST_LOG` - Log filter directives (default [`DEFAULT_LOG_FILTER`](super::constant::DEFAULT_LOG_FILTER))

use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;
use crate::utils::constant::DEFAULT_BIND_ADDRESS;

/// Deployment environment of the running process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    /// Parses an `APP_ENV` value, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::Invalid(format!(
                "unknown APP_ENV `{other}`, expected `development` or `production`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_env: AppEnv,
    pub bind_address: SocketAddr,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("APP_ENV").ok().as_deref(),
            env::var("BIND_ADDRESS").ok().as_deref(),
        )
    }

    /// Builds the configuration from raw values, applying defaults for missing ones.
    pub fn from_values(
        app_env: Option<&str>,
        bind_address: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let app_env = app_env.map(AppEnv::parse).transpose()?.unwrap_or_default();

        let bind_address = bind_address
            .unwrap_or(DEFAULT_BIND_ADDRESS)
            .trim()
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("invalid BIND_ADDRESS: {e}")))?;

        Ok(Self {
            app_env,
            bind_address,
        })
    }
}
