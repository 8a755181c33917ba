use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validator::validate_absolute_url;

/// Query string of `GET /q`
///
/// A missing `url` parameter becomes an empty string, which the validation
/// then rejects.
#[derive(Debug, Validate)]
pub struct QueryParams {
    #[validate(custom(function = "validate_absolute_url"))]
    pub url: String,
}

impl QueryParams {
    /// Builds the params from decoded query pairs. When `url` is repeated,
    /// the first occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "url").then_some(value))
            .unwrap_or_default();

        Self { url }
    }
}

/// Outcome of a successful fetch, serialized as `{"url":...,"status":...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// The `url` parameter exactly as received.
    pub url: String,
    /// Numeric status code returned by the fetched resource.
    pub status: u16,
}
