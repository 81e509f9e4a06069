//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every room endpoint plus the index and health probes
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] that describe rooms, statistics and
//!   the success and failure envelopes without coupling domain types to
//!   utoipa
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::health::HealthSummary;
use crate::inbound::http::index::{EndpointMap, IndexBody};
use crate::inbound::http::rooms::{
    AvailabilityBody, CreateRoomBody, PriceQuoteBody, UpdateRoomBody,
};
use crate::inbound::http::schemas::{
    AvailabilityCountsSchema, DeleteEnvelopeSchema, ErrorCodeSchema, ErrorEnvelopeSchema,
    PriceEnvelopeSchema, RoomEnvelopeSchema, RoomListEnvelopeSchema, RoomSnapshotSchema,
    RoomStatisticsSchema, RoomTypeSchema, StatisticsEnvelopeSchema,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel room inventory API",
        description = "Room catalogue, availability, seasonal pricing and statistics.",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::available_rooms,
        crate::inbound::http::rooms::occupied_rooms,
        crate::inbound::http::rooms::search_rooms,
        crate::inbound::http::rooms::room_statistics,
        crate::inbound::http::rooms::rooms_by_type,
        crate::inbound::http::rooms::get_room,
        crate::inbound::http::rooms::update_room,
        crate::inbound::http::rooms::delete_room,
        crate::inbound::http::rooms::room_price,
        crate::inbound::http::rooms::update_availability,
    ),
    components(schemas(
        ErrorCodeSchema,
        ErrorEnvelopeSchema,
        RoomTypeSchema,
        RoomSnapshotSchema,
        AvailabilityCountsSchema,
        RoomStatisticsSchema,
        RoomEnvelopeSchema,
        RoomListEnvelopeSchema,
        StatisticsEnvelopeSchema,
        PriceEnvelopeSchema,
        DeleteEnvelopeSchema,
        CreateRoomBody,
        UpdateRoomBody,
        AvailabilityBody,
        PriceQuoteBody,
        HealthSummary,
        IndexBody,
        EndpointMap,
    )),
    tags(
        (name = "rooms", description = "Room inventory operations"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "index", description = "Service description")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // Note: utoipa replaces :: with . in schema names
    const ROOM_SCHEMA_NAME: &str = "crate.domain.RoomSnapshot";
    const STATISTICS_SCHEMA_NAME: &str = "crate.domain.RoomStatistics";

    /// Assert that an Object schema contains a field with the given name.
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
    fn openapi_room_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let room_schema = schemas.get(ROOM_SCHEMA_NAME).expect("Room schema");

        for field in ["id", "number", "type", "basePrice", "isAvailable", "amenities"] {
            assert_object_schema_has_field(room_schema, field);
        }
    }

    #[test]
    fn openapi_statistics_schema_has_breakdown() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let stats = schemas
            .get(STATISTICS_SCHEMA_NAME)
            .expect("Statistics schema");

        assert_object_schema_has_field(stats, "byType");
    }

    #[test]
    fn openapi_lists_every_room_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/health",
            "/api/rooms",
            "/api/rooms/available",
            "/api/rooms/occupied",
            "/api/rooms/search",
            "/api/rooms/stats/statistics",
            "/api/rooms/type/{type}",
            "/api/rooms/{id}",
            "/api/rooms/{id}/price",
            "/api/rooms/{id}/availability",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let item = doc.paths.paths.get("/api/rooms/{id}").expect("room item");
        assert!(item.get.is_some() && item.put.is_some() && item.delete.is_some());
    }
}
