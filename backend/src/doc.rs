//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every anime route, the health probes, the shared
//! error payload and the HTTP Basic security scheme. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::animes::{AnimeBody, AnimeInsertRequest, AnimeUpdateRequest};
use crate::inbound::http::error::ErrorPayload;
use crate::inbound::http::schemas::AnimePageSchema;

/// Enrich the generated document with the HTTP Basic security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "basicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Anime catalogue API",
        description = "CRUD operations over a catalogue of anime titles, protected by HTTP Basic authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("basicAuth" = [])),
    paths(
        crate::inbound::http::animes::list_animes,
        crate::inbound::http::animes::list_all_animes,
        crate::inbound::http::animes::find_animes_by_name,
        crate::inbound::http::animes::find_anime_by_id,
        crate::inbound::http::animes::create_anime,
        crate::inbound::http::animes::replace_anime,
        crate::inbound::http::animes::delete_anime,
        crate::inbound::http::animes::admin_delete_anime,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AnimeBody,
        AnimeInsertRequest,
        AnimeUpdateRequest,
        AnimePageSchema,
        ErrorPayload
    )),
    tags(
        (name = "animes", description = "Anime catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
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

    #[rstest]
    #[case("ErrorPayload", "developerMessage")]
    #[case("ErrorPayload", "fieldsMessage")]
    #[case("AnimeBody", "name")]
    #[case("AnimePage", "totalElements")]
    #[case("AnimeUpdateRequest", "id")]
    fn schemas_expose_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");
        assert_object_schema_has_field(found, field);
    }

    #[rstest]
    #[case("/animes")]
    #[case("/animes/all")]
    #[case("/animes/find")]
    #[case("/animes/{id}")]
    #[case("/animes/admin/{id}")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn basic_security_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("basicAuth"));
    }
}
