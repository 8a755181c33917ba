//! # Qurl - URL Status Query Service
//!
//! An HTTP service that fetches the URL passed to `GET /q?url=...` and
//! reports the status code it answered with.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the exposed endpoints
//! - [`models`] - Shared state and request/response payloads
//! - [`services`] - The fetcher abstraction and its implementations
//! - [`utils`] - Configuration, constants, logging and validators

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, query};
use crate::models::AppState;
use crate::services::fetcher::{Fetcher, HttpFetcher};
use crate::utils::constant::{HEALTH_CHECK_PATH, QUERY_PATH};

/// Creates an Axum router that fetches target URLs over the network.
///
/// This is a convenience function that calls [`app_with_fetcher`] with an
/// [`HttpFetcher`].
#[inline]
pub fn app() -> Router {
    app_with_fetcher(Arc::new(HttpFetcher::new()))
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `fetcher` - Implementation used by `GET /q` to retrieve target URLs,
///   e.g. a [`CannedFetcher`](crate::services::fetcher::CannedFetcher) in tests
///
/// # Returns
///
/// A configured Axum router with all application routes and request tracing
pub fn app_with_fetcher(fetcher: Arc<dyn Fetcher>) -> Router {
    let state = Arc::new(AppState::new(fetcher));

    Router::new()
        .route(HEALTH_CHECK_PATH, get(health_check))
        .route(QUERY_PATH, get(query))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
