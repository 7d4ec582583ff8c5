use crate::errors::handlers::not_found;
use super::shutdown::shutdown_signal;
use axum::{
    Json, Router,
    routing::{get, get_service},
};
use core_config::server::ServerConfig;
use std::io;
use std::path::Path;
use tower_http::services::ServeFile;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new();
///     let config = ServerConfig::default();
///     create_app(router, &config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server is running on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the top-level router around the application's routes.
///
/// This function sets up:
/// - `GET /` serving `index_file` as the landing page
/// - `GET /api-docs/openapi.json` with the document generated from `T`
/// - the API routes, merged at the root (no prefix)
/// - a plain-text 404 for every unmatched path *and* every unmatched method
///   on a known path
/// - request tracing
///
/// `apis` must already have its state applied.
///
/// # Example
/// ```ignore
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, "index.html");
/// ```
pub fn create_router<T>(apis: Router, index_file: impl AsRef<Path>) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route("/", get_service(ServeFile::new(index_file.as_ref())))
        .route("/api-docs/openapi.json", get(openapi_json::<T>))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn openapi_json<T: OpenApi>() -> Json<utoipa::openapi::OpenApi> {
    Json(T::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::messages::SITE_NOT_FOUND;
    use axum::{body::Body, http::StatusCode, response::Response};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn app(index_file: &Path) -> Router {
        let apis = Router::new().route("/deportes", get(|| async { "[]" }));
        create_router::<TestDoc>(apis, index_file)
    }

    async fn call(app: Router, method: &str, uri: &str) -> Response {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_landing_page_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("index.html");
        std::fs::write(&index, "<h1>Deportes</h1>").unwrap();

        let response = call(app(&index), "GET", "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "<h1>Deportes</h1>");
    }

    #[tokio::test]
    async fn test_unknown_path_hits_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let response = call(app(&dir.path().join("index.html")), "GET", "/nada/aqui").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, SITE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unregistered_method_hits_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("index.html");

        let response = call(app(&index), "PATCH", "/deportes").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, SITE_NOT_FOUND);

        let response = call(app(&index), "POST", "/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, SITE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let response = call(
            app(&dir.path().join("index.html")),
            "GET",
            "/api-docs/openapi.json",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(doc["info"]["title"], "test");
    }
}
