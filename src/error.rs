//! Unified error types for the profile API.

use thiserror::Error;

/// Unified error type for the service.
///
/// Requests never produce these: the two endpoints are infallible constants
/// and everything else is axum's default behavior. Only process startup can
/// fail.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
