use std::sync::Arc;

use tracing::info;

use crate::services::fetcher::Fetcher;

/// Application state shared across requests. Needs to be thread-safe.
///
/// Nothing in here is mutated while serving requests, so handlers never
/// coordinate with each other.
pub struct AppState {
    /// The fetcher used to retrieve target URLs.
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        info!("Initializing application state");
        Self { fetcher }
    }
}
