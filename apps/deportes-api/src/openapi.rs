//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Document-level metadata; paths come from the domain crates.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Deportes API",
        version = "0.1.0",
        description = "Sports catalog kept in a single JSON file",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5003", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for all APIs
///
/// The deportes routes are mounted at the root, so the domain document is
/// merged rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiInfo::openapi().merge_from(domain_deportes::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Deportes API");
        for path in ["/deportes", "/agregar", "/borrar/{name}", "/editar/{name}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
