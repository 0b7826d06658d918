//! HTTP API handlers.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics;

/// Message served at `/`.
pub const STATUS_MESSAGE: &str = "Endpoint is up!!";

/// Message served at `/me`.
pub const ABOUT_MESSAGE: &str =
    "This endpoint is about my handle @plusminuschirag go find me on linkedin and github";

/// Single-field message response.
///
/// Every endpoint answers with exactly this shape: one `message` key holding
/// a fixed string.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    #[schema(value_type = String)]
    pub message: &'static str,
}

/// Status handler - always returns 200 with the fixed status message.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    metrics::inc_requests("/");
    Json(MessageResponse {
        message: STATUS_MESSAGE,
    })
}

/// About-me handler - always returns 200 with the fixed introduction message.
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "About the author", body = MessageResponse)
    )
)]
pub async fn me() -> Json<MessageResponse> {
    metrics::inc_requests("/me");
    Json(MessageResponse {
        message: ABOUT_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn root_returns_status_message() {
        let Json(body) = root().await;
        assert_eq!(body.message, STATUS_MESSAGE);
    }

    #[tokio::test]
    async fn me_returns_about_message() {
        let Json(body) = me().await;
        assert_eq!(body.message, ABOUT_MESSAGE);
    }

    #[test]
    fn message_response_serializes_to_single_key() {
        let json = serde_json::to_string(&MessageResponse {
            message: STATUS_MESSAGE,
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"Endpoint is up!!"}"#);
    }
}
