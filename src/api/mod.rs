//! HTTP API module for the status and about-me endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use routes::{create_router, create_router_with_metrics};
