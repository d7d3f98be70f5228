//! OpenAPI documentation for the JSON endpoints.
//!
//! Pages are HTML and stay out of the document; it covers the contact relay
//! and the health probes. Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::contact::{ContactReceipt, ContactRequest, ContactResponse};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coaching site API",
        description = "Contact form relay and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactRequest, ContactResponse, ContactReceipt, ErrorBody)),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_contact_and_health_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/contact", "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn error_body_schema_has_error_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("ErrorBody").expect("ErrorBody schema");
        assert_object_schema_has_field(schema, "error");
        assert_object_schema_has_field(schema, "details");
    }
}
