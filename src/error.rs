//! # Centralized Error Handling
//!
//! This module provides the error types of the application. Request errors
//! are turned into fixed plain-text HTTP responses in one place; startup
//! errors are reported by `main`.

use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::services::fetcher::FetchError;
use crate::utils::constant::{INTERNAL_ERROR_BODY, INVALID_URL_BODY};

/// Errors that terminate the processing of a single request.
///
/// Fetch errors are logged when converted into a response. Their details are
/// never sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid url")]
    InvalidUrl,

    #[error("fetch failed")]
    Fetch(#[from] FetchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidUrl => (StatusCode::BAD_REQUEST, INVALID_URL_BODY).into_response(),
            AppError::Fetch(e) => {
                error!(error = %e, "Fetching target url failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while configuring or starting the server
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config invalid: {0}")]
    Invalid(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("server IO error: {0}")]
    Io(#[from] io::Error),
}
