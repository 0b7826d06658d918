//! HTTP API route definitions.

use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::docs::openapi_spec;
use super::handlers::{me, root};

/// Create the API router.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Fixed-message endpoints
        .route("/", get(root))
        .route("/me", get(me))
        // OpenAPI document
        .route("/openapi.json", get(openapi_spec))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Create the API router with a Prometheus scrape endpoint mounted.
///
/// The handle must come from the recorder installed at startup; the scrape
/// endpoint renders whatever that recorder has accumulated.
pub fn create_router_with_metrics(metrics_handle: PrometheusHandle) -> Router {
    create_router().route(
        "/metrics",
        get(move || {
            let handle = metrics_handle.clone();
            async move { handle.render() }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn root_endpoint_returns_ok() {
        let app = create_router();

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn me_endpoint_returns_ok() {
        let app = create_router();

        let response = app.oneshot(get_request("/me")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn defined_routes_answer_with_json() {
        for uri in ["/", "/me"] {
            let app = create_router();
            let response = app.oneshot(get_request(uri)).await.unwrap();

            let content_type = response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert!(
                content_type.starts_with("application/json"),
                "unexpected content-type for {uri}: {content_type}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let app = create_router();

        let response = app.oneshot(get_request("/unknown")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_returns_405() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
