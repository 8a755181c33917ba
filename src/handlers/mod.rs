//! # HTTP Request Handlers
//!
//! This module contains the HTTP request handlers of the qurl service.
//!
//! ## Available Handlers
//!
//! - **Query** (`query`) - Fetches a target URL and reports its status code
//! - **Health Check** (`health_check`) - Application health monitoring

mod health_check;
mod query;

pub use health_check::*;
pub use query::*;
