//! Room entity, type table, pricing strategies and search.

mod pricing;
mod room;
mod room_type;
mod search;

pub use pricing::{PricingStrategy, Season, StayDates, resolve_strategy};
pub use room::{
    DEFAULT_OCCUPANCY, Room, RoomFactory, RoomNumber, RoomSnapshot, RoomUpdate,
    validate_base_price, validate_occupancy,
};
pub use room_type::{ParseRoomTypeError, RoomType, RoomTypeProfile};
pub use search::{AvailabilityCounts, RoomSearchCriteria, RoomStatistics};

/// Validation failures raised while building or mutating a [`Room`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomValidationError {
    /// The type tag is not one of the recognised room types.
    #[error("Invalid room type: {tag}")]
    UnknownRoomType {
        /// Tag as supplied.
        tag: String,
    },
    /// Price was zero, negative, or not finite.
    #[error("Base price must be greater than 0")]
    NonPositiveBasePrice,
    /// Occupancy was zero or negative.
    #[error("Occupancy must be greater than 0")]
    NonPositiveOccupancy,
    /// Occupancy does not fit the entity field.
    #[error("Occupancy must not exceed {}", u32::MAX)]
    OccupancyTooLarge,
    /// Room number was blank.
    #[error("Room number must not be empty")]
    BlankRoomNumber,
}

impl RoomValidationError {
    /// Wire name of the offending request field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::UnknownRoomType { .. } => "type",
            Self::NonPositiveBasePrice => "basePrice",
            Self::NonPositiveOccupancy | Self::OccupancyTooLarge => "occupancy",
            Self::BlankRoomNumber => "number",
        }
    }
}

impl From<RoomValidationError> for super::Error {
    fn from(err: RoomValidationError) -> Self {
        Self::invalid_argument(err.to_string())
            .with_details(serde_json::json!({ "field": err.field() }))
    }
}
