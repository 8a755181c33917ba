//! # Application Constants
//!
//! This module defines the fixed values used throughout the qurl service:
//! route paths, response bodies, and configuration defaults.

/// Path of the query endpoint
pub const QUERY_PATH: &str = "/q";

/// Path of the health check endpoint
pub const HEALTH_CHECK_PATH: &str = "/health-check";

/// Body returned with `400 Bad Request` when the `url` parameter is not an absolute URL
pub const INVALID_URL_BODY: &str = "INVALID_URL\n";

/// Body returned with `500 Internal Server Error` when the target cannot be fetched
pub const INTERNAL_ERROR_BODY: &str = "INTERNAL_ERROR\n";

/// Address the server listens on when `BIND_ADDRESS` is not set
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8090";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "qurl=info,tower_http=info";

/// Name attached to every log record in production (JSON) mode
pub const APP_NAME: &str = "qurl";
