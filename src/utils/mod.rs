//! # Utility Modules
//!
//! This module contains configuration, constants, logging setup and
//! validators used throughout the qurl service.
//!
//! ## Available Utilities
//!
//! - **Config** (`config`) - Environment-driven runtime settings
//! - **Constants** (`constant`) - Route paths, response bodies and defaults
//! - **Telemetry** (`telemetry`) - Tracing subscriber installation
//! - **Validators** (`validator`) - Input validation rules

pub mod config;
pub mod constant;
pub mod telemetry;
pub mod validator;
