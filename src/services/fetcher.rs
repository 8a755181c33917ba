//! # Fetcher Service
//!
//! This module provides the capability of retrieving a URL with a single GET
//! request. The service trait allows the query handler to be wired either to
//! the network or to a fixed, pre-configured response.
//!
//! ## Implementations
//!
//! - [`HttpFetcher`] - Production implementation performing real network I/O
//! - [`CannedFetcher`] - Deterministic implementation returning a [`CannedResponse`]

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::{self, header::CONTENT_TYPE};
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors that can occur while fetching a URL
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to build response: {0}")]
    Build(#[from] http::Error),
}

/// Trait for services able to fetch a URL
///
/// The response is handed back untouched: reading or dropping the body is
/// left to the caller. Failures are logged by the caller.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs a GET request against `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request cannot be constructed or if the
    /// transport fails (DNS resolution, connection refused, IO errors).
    async fn fetch(&self, url: &str) -> Result<reqwest::Response, FetchError>;
}

/// Network-backed fetcher
///
/// Uses a `reqwest` client with default settings: no request timeout and the
/// default redirect policy.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http_client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        info!("Initializing HTTP fetcher");
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        debug!("Sending GET request");

        let response = self
            .http_client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        debug!(status = %response.status(), "Received response");
        Ok(response)
    }
}

/// A fixed response served by [`CannedFetcher`]
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub expected_status_code: u16,
    pub expected_body: String,
    pub expected_headers: HashMap<String, Vec<String>>,
}

impl CannedResponse {
    pub fn new(expected_status_code: u16, expected_body: impl Into<String>) -> Self {
        Self {
            expected_status_code,
            expected_body: expected_body.into(),
            expected_headers: HashMap::new(),
        }
    }

    /// Appends `value` to the values served for header `name`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.expected_headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }
}

/// Fetcher that never touches the network
///
/// Every call synthesizes a fresh HTTP/1.1 response from the configured
/// [`CannedResponse`].
#[derive(Debug, Clone)]
pub struct CannedFetcher {
    canned: CannedResponse,
}

impl CannedFetcher {
    pub fn new(canned: CannedResponse) -> Self {
        Self { canned }
    }
}

#[async_trait]
impl Fetcher for CannedFetcher {
    #[instrument(skip(self), fields(url = %url, status = self.canned.expected_status_code))]
    async fn fetch(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        let mut builder = http::Response::builder()
            .status(self.canned.expected_status_code)
            .version(http::Version::HTTP_11);

        for (name, values) in &self.canned.expected_headers {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        let response = builder.body(self.canned.expected_body.clone())?;

        debug!("Serving canned response");
        Ok(reqwest::Response::from(response))
    }
}
