//! Room inventory HTTP handlers.
//!
//! ```text
//! GET    /api/rooms
//! POST   /api/rooms
//! GET    /api/rooms/available
//! GET    /api/rooms/occupied
//! GET    /api/rooms/search
//! GET    /api/rooms/stats/statistics
//! GET    /api/rooms/type/{type}
//! GET    /api/rooms/{id}
//! PUT    /api/rooms/{id}
//! DELETE /api/rooms/{id}
//! GET    /api/rooms/{id}/price
//! PUT    /api/rooms/{id}/availability
//! ```
//!
//! Literal paths are registered ahead of `{id}` so they are never captured
//! as room identifiers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{
    CreateRoomRequest, PriceQuoteRequest, UpdateAvailabilityRequest, UpdateRoomRequest,
};
use crate::domain::{Error, RoomSearchCriteria, RoomUpdate, StayDates};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::extractor_error;
use crate::inbound::http::schemas::{
    DeleteEnvelopeSchema, ErrorEnvelopeSchema, PriceEnvelopeSchema, RoomEnvelopeSchema,
    RoomListEnvelopeSchema, StatisticsEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// Request payload for creating a room.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBody {
    /// One of `simple`, `double`, `executive`, `suite`.
    #[serde(rename = "type")]
    #[schema(example = "suite")]
    pub room_type: Option<String>,
    #[schema(example = "501")]
    pub number: Option<String>,
    #[schema(example = 250.0)]
    pub base_price: Option<f64>,
    /// Defaults to 2 when omitted.
    pub occupancy: Option<i64>,
}

/// Partial update payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomBody {
    pub base_price: Option<f64>,
    pub occupancy: Option<i64>,
    pub is_available: Option<bool>,
}

/// Availability payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBody {
    pub is_available: Option<bool>,
}

/// Query string for price quotes.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// `low`, `high` or `peak`; anything else prices as `low` and is echoed
    /// back unchanged.
    pub season: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// Query string for room search. Blank values are ignored except for
/// `isAvailable`, whose presence alone applies the filter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive type tag.
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    /// Only the literal `true` selects available rooms; any other value,
    /// including an empty one, selects occupied rooms.
    pub is_available: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub occupancy: Option<String>,
}

/// Price quote returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteBody {
    pub room_id: Uuid,
    #[schema(example = "high")]
    pub season: String,
    pub price: f64,
    #[schema(value_type = Option<Object>)]
    pub dates: Option<StayDates>,
}

/// Room ids that are not UUIDs cannot name a room.
fn parse_room_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::not_found(format!("Room with ID {raw} not found")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    field: &str,
) -> Result<Option<T>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                Error::invalid_argument(format!("{field} must be a number"))
                    .with_details(json!({ "field": field, "value": raw }))
            })
        })
        .transpose()
}

impl SearchQuery {
    fn into_criteria(self) -> Result<RoomSearchCriteria, Error> {
        Ok(RoomSearchCriteria {
            room_type: non_blank(self.room_type),
            is_available: self.is_available.map(|flag| flag == "true"),
            min_price: parse_number(self.min_price, "minPrice")?,
            max_price: parse_number(self.max_price, "maxPrice")?,
            occupancy: parse_number(self.occupancy, "occupancy")?,
        })
    }
}

impl PriceQuery {
    fn stay_dates(&self) -> Option<StayDates> {
        match (non_blank(self.check_in.clone()), non_blank(self.check_out.clone())) {
            (Some(check_in), Some(check_out)) => Some(StayDates {
                check_in,
                check_out,
            }),
            _ => None,
        }
    }
}

impl CreateRoomBody {
    fn into_request(self) -> Result<CreateRoomRequest, Error> {
        match (self.room_type, self.number, self.base_price) {
            (Some(room_type), Some(number), Some(base_price))
                if !room_type.trim().is_empty() && !number.trim().is_empty() =>
            {
                Ok(CreateRoomRequest {
                    room_type,
                    number,
                    base_price,
                    occupancy: self.occupancy,
                })
            }
            _ => Err(
                Error::invalid_argument("Missing required fields: type, number, basePrice")
                    .with_details(json!({ "fields": ["type", "number", "basePrice"] })),
            ),
        }
    }
}

/// List every room.
#[utoipa::path(
    get,
    path = "/api/rooms",
    responses(
        (status = 200, description = "All rooms", body = RoomListEnvelopeSchema),
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let rooms = state.rooms_query.list_rooms().await?;
    Ok(Envelope::list(rooms).ok())
}

/// Create a room.
#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = CreateRoomBody,
    responses(
        (status = 201, description = "Room created", body = RoomEnvelopeSchema),
        (status = 400, description = "Invalid or duplicate room", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "createRoom"
)]
#[post("")]
pub async fn create_room(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRoomBody>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner().into_request()?;
    let room = state.rooms.create_room(request).await?;
    Ok(Envelope::data(room)
        .with_message("Room created successfully")
        .created())
}

/// List available rooms.
#[utoipa::path(
    get,
    path = "/api/rooms/available",
    responses((status = 200, description = "Available rooms", body = RoomListEnvelopeSchema)),
    tags = ["rooms"],
    operation_id = "listAvailableRooms"
)]
#[get("/available")]
pub async fn available_rooms(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let rooms = state.rooms_query.available_rooms().await?;
    Ok(Envelope::list(rooms).ok())
}

/// List occupied rooms.
#[utoipa::path(
    get,
    path = "/api/rooms/occupied",
    responses((status = 200, description = "Occupied rooms", body = RoomListEnvelopeSchema)),
    tags = ["rooms"],
    operation_id = "listOccupiedRooms"
)]
#[get("/occupied")]
pub async fn occupied_rooms(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let rooms = state.rooms_query.occupied_rooms().await?;
    Ok(Envelope::list(rooms).ok())
}

/// Search rooms; the applied criteria are echoed back.
#[utoipa::path(
    get,
    path = "/api/rooms/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching rooms", body = RoomListEnvelopeSchema),
        (status = 400, description = "Malformed numeric filter", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "searchRooms"
)]
#[get("/search")]
pub async fn search_rooms(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let criteria = query.into_inner().into_criteria()?;
    let echoed = serde_json::to_value(&criteria)
        .map_err(|err| Error::internal(format!("failed to encode search criteria: {err}")))?;
    let rooms = state.rooms_query.search(criteria).await?;
    Ok(Envelope::list(rooms).with_extra("criteria", echoed).ok())
}

/// Aggregate room statistics.
#[utoipa::path(
    get,
    path = "/api/rooms/stats/statistics",
    responses((status = 200, description = "Room statistics", body = StatisticsEnvelopeSchema)),
    tags = ["rooms"],
    operation_id = "roomStatistics"
)]
#[get("/stats/statistics")]
pub async fn room_statistics(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let stats = state.rooms_query.statistics().await?;
    Ok(Envelope::data(stats).ok())
}

/// List rooms of one type; the label is matched case-insensitively.
#[utoipa::path(
    get,
    path = "/api/rooms/type/{type}",
    params(("type" = String, Path, description = "Room type tag")),
    responses((status = 200, description = "Rooms of the type", body = RoomListEnvelopeSchema)),
    tags = ["rooms"],
    operation_id = "listRoomsByType"
)]
#[get("/type/{type}")]
pub async fn rooms_by_type(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let label = path.into_inner();
    let rooms = state.rooms_query.rooms_by_type(label.clone()).await?;
    Ok(Envelope::list(rooms).with_extra("type", json!(label)).ok())
}

/// Fetch one room.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    params(("id" = String, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Room found", body = RoomEnvelopeSchema),
        (status = 404, description = "Room not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "getRoom"
)]
#[get("/{id}")]
pub async fn get_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let missing = || Error::not_found("Room not found");
    let room_id = parse_room_id(&path).map_err(|_| missing())?;
    let room = state
        .rooms_query
        .find_room(room_id)
        .await?
        .ok_or_else(missing)?;
    Ok(Envelope::data(room).ok())
}

/// Apply a partial update to one room.
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    params(("id" = String, Path, description = "Room identifier")),
    request_body = UpdateRoomBody,
    responses(
        (status = 200, description = "Room updated", body = RoomEnvelopeSchema),
        (status = 400, description = "Invalid update", body = ErrorEnvelopeSchema),
        (status = 404, description = "Room not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "updateRoom"
)]
#[put("/{id}")]
pub async fn update_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateRoomBody>,
) -> ApiResult<HttpResponse> {
    let room_id = parse_room_id(&path)?;
    let body = payload.into_inner();
    let room = state
        .rooms
        .update_room(UpdateRoomRequest {
            room_id,
            update: RoomUpdate {
                base_price: body.base_price,
                occupancy: body.occupancy,
                is_available: body.is_available,
            },
        })
        .await?;
    Ok(Envelope::data(room)
        .with_message("Room updated successfully")
        .ok())
}

/// Delete one room.
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    params(("id" = String, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Room deleted", body = DeleteEnvelopeSchema),
        (status = 404, description = "Room not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "deleteRoom"
)]
#[delete("/{id}")]
pub async fn delete_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let room_id = parse_room_id(&path)?;
    let deleted = state.rooms.delete_room(room_id).await?;
    Ok(Envelope::message(deleted.message).ok())
}

/// Price one room for a season.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/price",
    params(("id" = String, Path, description = "Room identifier"), PriceQuery),
    responses(
        (status = 200, description = "Price quote", body = PriceEnvelopeSchema),
        (status = 404, description = "Room not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "calculateRoomPrice"
)]
#[get("/{id}/price")]
pub async fn room_price(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<PriceQuery>,
) -> ApiResult<HttpResponse> {
    let room_id = parse_room_id(&path)?;
    let query = query.into_inner();
    let dates = query.stay_dates();
    let season = query.season.unwrap_or_else(|| "low".to_owned());
    let quote = state
        .rooms_query
        .calculate_price(PriceQuoteRequest {
            room_id,
            season: season.clone(),
            dates: dates.clone(),
        })
        .await?;
    Ok(Envelope::data(PriceQuoteBody {
        room_id: quote.room_id,
        season,
        price: quote.price,
        dates,
    })
    .ok())
}

/// Set a room's availability flag.
#[utoipa::path(
    put,
    path = "/api/rooms/{id}/availability",
    params(("id" = String, Path, description = "Room identifier")),
    request_body = AvailabilityBody,
    responses(
        (status = 200, description = "Availability updated", body = RoomEnvelopeSchema),
        (status = 400, description = "Missing isAvailable", body = ErrorEnvelopeSchema),
        (status = 404, description = "Room not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["rooms"],
    operation_id = "updateRoomAvailability"
)]
#[put("/{id}/availability")]
pub async fn update_availability(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AvailabilityBody>,
) -> ApiResult<HttpResponse> {
    let is_available = payload.into_inner().is_available.ok_or_else(|| {
        Error::invalid_argument("Missing required field: isAvailable")
            .with_details(json!({ "field": "isAvailable" }))
    })?;
    let room_id = parse_room_id(&path)?;
    let room = state
        .rooms
        .update_availability(UpdateAvailabilityRequest {
            room_id,
            is_available,
        })
        .await?;
    let label = if is_available { "available" } else { "occupied" };
    let message = format!("Room {} availability updated to {label}", room.number);
    Ok(Envelope::data(room).with_message(message).ok())
}

/// Register the room routes under `/api/rooms`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/rooms")
            .app_data(
                web::JsonConfig::default().error_handler(|err, req| extractor_error(err, req)),
            )
            .app_data(
                web::QueryConfig::default().error_handler(|err, req| extractor_error(err, req)),
            )
            .service(list_rooms)
            .service(create_room)
            .service(available_rooms)
            .service(occupied_rooms)
            .service(search_rooms)
            .service(room_statistics)
            .service(rooms_by_type)
            .service(room_price)
            .service(update_availability)
            .service(get_room)
            .service(update_room)
            .service(delete_room),
    );
}

#[cfg(test)]
#[path = "rooms_tests.rs"]
mod tests;
