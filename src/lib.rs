//! Minimal profile HTTP API.
//!
//! Serves two fixed JSON endpoints: a status message at `/` and a short
//! about-me blurb at `/me`. Each response is a single-field object:
//!
//! ```text
//! GET /   -> {"message": "Endpoint is up!!"}
//! GET /me -> {"message": "This endpoint is about my handle ..."}
//! ```
//!
//! The handlers are stateless constants; everything else here is the
//! operational shell around them.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router, handlers, and OpenAPI document
//! - [`metrics`]: Request counters and the Prometheus recorder
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
