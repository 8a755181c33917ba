//! # Services
//!
//! This module contains the services the HTTP handlers delegate to.
//!
//! ## Available Services
//!
//! - **Fetcher** (`fetcher`) - Retrieves a URL over the network or from a canned response

pub mod fetcher;
