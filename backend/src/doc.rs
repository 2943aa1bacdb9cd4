//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the vehicle and health endpoints together with the
//! schemas they exchange. The document backs Swagger UI in debug builds and
//! is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Position, Vehicle, VehicleId};
use crate::inbound::http::vehicles::{CreateVehicleRequestBody, CreateVehicleResponseBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet backend API",
        description = "HTTP interface for registering fleet vehicles and health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::vehicles::create_vehicle,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateVehicleRequestBody,
        CreateVehicleResponseBody,
        Vehicle,
        VehicleId,
        Position,
        Error,
        ErrorCode
    )),
    tags(
        (name = "vehicles", description = "Vehicle registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema structure.

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
    #[case("/api/v1/vehicles")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("Error", &["code", "message"])]
    #[case("CreateVehicleRequestBody", &["shortcode", "battery", "latitude", "longitude"])]
    #[case("Vehicle", &["id", "shortcode", "battery", "position"])]
    fn schemas_have_expected_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }
}
