//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.
//! The `*EnvelopeSchema` types describe the success and failure envelopes
//! wrapped around every room response.

#![expect(
    dead_code,
    reason = "Schema wrappers are used only for OpenAPI generation via utoipa"
)]

use std::collections::BTreeMap;

use utoipa::ToSchema;

use crate::inbound::http::rooms::PriceQuoteBody;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request failed validation.
    #[schema(rename = "invalid_argument")]
    InvalidArgument,
    /// A room with the same number already exists.
    #[schema(rename = "duplicate_key")]
    DuplicateKey,
    /// The requested room or route does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The client exceeded its request budget.
    #[schema(rename = "rate_limited")]
    RateLimited,
    /// The service is not ready.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Failure envelope returned for every error.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ErrorEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable message.
    #[schema(example = "Room with ID 42 not found")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::RoomType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RoomType)]
pub enum RoomTypeSchema {
    #[schema(rename = "simple")]
    Simple,
    #[schema(rename = "double")]
    Double,
    #[schema(rename = "executive")]
    Executive,
    #[schema(rename = "suite")]
    Suite,
}

/// OpenAPI schema for [`crate::domain::RoomSnapshot`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RoomSnapshot, rename_all = "camelCase")]
pub struct RoomSnapshotSchema {
    #[schema(value_type = String, format = "uuid")]
    id: String,
    #[schema(example = "401")]
    number: String,
    #[schema(rename = "type")]
    room_type: RoomTypeSchema,
    #[schema(example = 200.0)]
    base_price: f64,
    #[schema(example = 4)]
    occupancy: u32,
    is_available: bool,
    amenities: Vec<String>,
    #[schema(format = "date-time")]
    created_at: String,
    #[schema(format = "date-time")]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::AvailabilityCounts`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AvailabilityCounts)]
pub struct AvailabilityCountsSchema {
    total: usize,
    available: usize,
    occupied: usize,
}

/// OpenAPI schema for [`crate::domain::RoomStatistics`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RoomStatistics, rename_all = "camelCase")]
pub struct RoomStatisticsSchema {
    total: usize,
    available: usize,
    occupied: usize,
    /// Keyed by type tag.
    by_type: BTreeMap<String, AvailabilityCountsSchema>,
}

/// Envelope around one room.
#[derive(ToSchema)]
pub struct RoomEnvelopeSchema {
    success: bool,
    data: RoomSnapshotSchema,
    message: Option<String>,
}

/// Envelope around a list of rooms.
#[derive(ToSchema)]
pub struct RoomListEnvelopeSchema {
    success: bool,
    data: Vec<RoomSnapshotSchema>,
    count: usize,
}

/// Envelope around room statistics.
#[derive(ToSchema)]
pub struct StatisticsEnvelopeSchema {
    success: bool,
    data: RoomStatisticsSchema,
}

/// Envelope around a price quote.
#[derive(ToSchema)]
pub struct PriceEnvelopeSchema {
    success: bool,
    data: PriceQuoteBody,
}

/// Envelope confirming a deletion.
#[derive(ToSchema)]
pub struct DeleteEnvelopeSchema {
    success: bool,
    #[schema(example = "Room 402 deleted successfully")]
    message: String,
}
