//! OpenAPI document for the HTTP surface.

use axum::Json;
use utoipa::OpenApi;

use super::handlers;

/// OpenAPI description of the two message endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::root, handlers::me),
    components(schemas(handlers::MessageResponse))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;

        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/me"));
    }
}
