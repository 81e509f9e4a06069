//! Domain primitives and the room inventory.
//!
//! Purpose: define the room entity, its pricing and search rules, and the
//! in-memory inventory behind the driving ports. Nothing here knows about
//! HTTP; adapters translate [`Error`] into transport responses.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Room, RoomFactory, RoomSnapshot: the entity and its read-only copy.
//! - RoomInventoryService: authoritative collection implementing
//!   [`ports::RoomCommand`] and [`ports::RoomQuery`].

pub mod error;
pub mod ports;
mod room_inventory_service;
pub mod rooms;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::room_inventory_service::RoomInventoryService;
pub use self::rooms::{
    AvailabilityCounts, DEFAULT_OCCUPANCY, ParseRoomTypeError, PricingStrategy, Room,
    RoomFactory, RoomNumber, RoomSearchCriteria, RoomSnapshot, RoomStatistics, RoomType,
    RoomTypeProfile, RoomUpdate, RoomValidationError, Season, StayDates, resolve_strategy,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use hotel_rooms::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("Room not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
