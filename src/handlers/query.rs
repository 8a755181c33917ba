//! # Query Handler
//!
//! Fetches the URL given in the `url` query parameter and reports the
//! status code the target answered with. Each request goes through:
//!
//! 1. Parsing the `url` query parameter (first one wins when repeated)
//! 2. Validating that it is an absolute URL (scheme and host)
//! 3. Fetching it once through the configured [`Fetcher`](crate::services::fetcher::Fetcher)
//! 4. Responding with the original URL and the numeric status code
//!
//! Any failure ends the request immediately; nothing is retried.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{Span, debug, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{AppState, FetchResult, QueryParams};

/// Fetches a URL and returns its status code.
///
/// GET /q?url=<target>
///
/// # Returns
///
/// - `200 OK` with `{"url":"<target>","status":<code>}` - Target was fetched
/// - `400 Bad Request` with `INVALID_URL\n` - Missing or non-absolute `url`
/// - `500 Internal Server Error` with `INTERNAL_ERROR\n` - Target could not be fetched
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), url))]
pub async fn query(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<FetchResult>> {
    let Query(pairs) = pairs.map_err(|e| {
        warn!(error = %e, "Malformed query string");
        AppError::InvalidUrl
    })?;
    let params = QueryParams::from_pairs(pairs);
    Span::current().record("url", params.url.as_str());

    if params.validate().is_err() {
        warn!("Rejecting url that is not absolute");
        return Err(AppError::InvalidUrl);
    }

    debug!("Fetching target url");
    let response = state.fetcher.fetch(&params.url).await?;
    let status = response.status().as_u16();

    info!(status, "Target url fetched");
    Ok(Json(FetchResult {
        url: params.url,
        status,
    }))
}
