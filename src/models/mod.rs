mod query;
mod state;

pub use query::{FetchResult, QueryParams};
pub use state::AppState;
