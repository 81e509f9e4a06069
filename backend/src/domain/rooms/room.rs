//! Room entity, factory, and read-only snapshot.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PricingStrategy, RoomType, RoomValidationError, StayDates};

/// Room number, unique within the inventory.
///
/// ## Invariants
/// - Never blank once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Validate and wrap a room number.
    ///
    /// # Errors
    /// Returns [`RoomValidationError::BlankRoomNumber`] for blank input.
    pub fn new(number: impl Into<String>) -> Result<Self, RoomValidationError> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(RoomValidationError::BlankRoomNumber);
        }
        Ok(Self(number))
    }

    /// Borrow the number as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for RoomNumber {
    type Error = RoomValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomNumber> for String {
    fn from(value: RoomNumber) -> Self {
        value.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accept only finite, strictly positive prices.
///
/// # Errors
/// Returns [`RoomValidationError::NonPositiveBasePrice`] otherwise.
pub fn validate_base_price(base_price: f64) -> Result<f64, RoomValidationError> {
    if base_price.is_finite() && base_price > 0.0 {
        Ok(base_price)
    } else {
        Err(RoomValidationError::NonPositiveBasePrice)
    }
}

/// Occupancy given to a new room when the caller omits it.
pub const DEFAULT_OCCUPANCY: u32 = 2;

/// Accept only strictly positive occupancy that fits the entity field.
///
/// # Errors
/// Returns [`RoomValidationError::NonPositiveOccupancy`] for zero or negative
/// values and [`RoomValidationError::OccupancyTooLarge`] past `u32::MAX`.
pub fn validate_occupancy(occupancy: i64) -> Result<u32, RoomValidationError> {
    if occupancy <= 0 {
        return Err(RoomValidationError::NonPositiveOccupancy);
    }
    u32::try_from(occupancy).map_err(|_| RoomValidationError::OccupancyTooLarge)
}

/// Partial update applied by [`Room::apply_update`]. `None` leaves a field
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    /// New nightly base price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    /// New maximum occupancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<i64>,
    /// New availability flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// A hotel room owned by the inventory.
///
/// Fields are private: the inventory mutates rooms through the methods below
/// and hands out [`RoomSnapshot`] copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    id: Uuid,
    number: RoomNumber,
    room_type: RoomType,
    base_price: f64,
    occupancy: u32,
    is_available: bool,
    amenities: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Room {
    /// Build an available room of `room_type` with the type's amenities.
    ///
    /// `occupancy` falls back to [`DEFAULT_OCCUPANCY`] when `None`, whatever
    /// the type.
    ///
    /// # Errors
    /// Returns [`RoomValidationError`] when the price or occupancy is not
    /// strictly positive.
    pub fn new(
        room_type: RoomType,
        number: RoomNumber,
        base_price: f64,
        occupancy: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Self, RoomValidationError> {
        let profile = room_type.profile();
        let base_price = validate_base_price(base_price)?;
        let occupancy = occupancy
            .map(validate_occupancy)
            .transpose()?
            .unwrap_or(DEFAULT_OCCUPANCY);

        Ok(Self {
            id: Uuid::new_v4(),
            number,
            room_type,
            base_price,
            occupancy,
            is_available: true,
            amenities: profile.amenities.iter().map(|&a| a.to_owned()).collect(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Stable identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Room number.
    #[must_use]
    pub const fn number(&self) -> &RoomNumber {
        &self.number
    }

    /// Type tag fixed at creation.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Nightly base price.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Maximum occupancy.
    #[must_use]
    pub const fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Whether the room can currently be let.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.is_available
    }

    /// Ordered amenity list.
    #[must_use]
    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the latest mutation.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Price this room under `strategy`.
    #[must_use]
    pub fn price_with(&self, strategy: PricingStrategy, dates: Option<&StayDates>) -> f64 {
        strategy(self.base_price, dates)
    }

    /// Set availability and stamp `updated_at`.
    pub fn update_status(&mut self, available: bool, now: DateTime<Utc>) {
        self.is_available = available;
        self.touch(now);
    }

    /// Apply a partial update.
    ///
    /// Every supplied field is validated before any is written, so a rejected
    /// update leaves the room untouched. Availability goes through
    /// [`Room::update_status`]; otherwise the room is stamped directly.
    ///
    /// # Errors
    /// Returns [`RoomValidationError`] for a non-positive price or occupancy.
    pub fn apply_update(
        &mut self,
        update: &RoomUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), RoomValidationError> {
        let base_price = update.base_price.map(validate_base_price).transpose()?;
        let occupancy = update.occupancy.map(validate_occupancy).transpose()?;

        if let Some(price) = base_price {
            self.base_price = price;
        }
        if let Some(occupancy) = occupancy {
            self.occupancy = occupancy;
        }
        match update.is_available {
            Some(available) => self.update_status(available, now),
            None => self.touch(now),
        }
        Ok(())
    }

    /// Read-only copy of the current attributes.
    #[must_use]
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot::from(self)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = next_stamp(self.updated_at, now);
    }
}

/// `updated_at` must strictly increase even if the clock stalls or steps
/// backwards.
fn next_stamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        return now;
    }
    previous
        .checked_add_signed(Duration::microseconds(1))
        .unwrap_or(previous)
}

/// Serialisable, fully materialised copy of a [`Room`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    /// Stable identifier.
    pub id: Uuid,
    /// Room number.
    pub number: String,
    /// Type tag.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Nightly base price.
    pub base_price: f64,
    /// Maximum occupancy.
    pub occupancy: u32,
    /// Availability flag.
    pub is_available: bool,
    /// Ordered amenity list.
    pub amenities: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the latest mutation.
    pub updated_at: DateTime<Utc>,
}

impl From<&Room> for RoomSnapshot {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            number: room.number.as_str().to_owned(),
            room_type: room.room_type,
            base_price: room.base_price,
            occupancy: room.occupancy,
            is_available: room.is_available,
            amenities: room.amenities.clone(),
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// Factory selecting the room variant from a type tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoomFactory;

impl RoomFactory {
    /// Build a room from an untyped tag.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use hotel_rooms::domain::RoomFactory;
    ///
    /// let room = RoomFactory::create_room("suite", "401", 200.0, None, Utc::now())
    ///     .expect("valid suite");
    /// assert_eq!(room.occupancy(), 2);
    /// assert_eq!(room.amenities().len(), 7);
    /// ```
    ///
    /// # Errors
    /// Returns [`RoomValidationError::UnknownRoomType`] when `type_tag` is
    /// not a recognised tag, or the validation error of the first rejected
    /// field.
    pub fn create_room(
        type_tag: &str,
        number: &str,
        base_price: f64,
        occupancy: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Room, RoomValidationError> {
        let room_type = type_tag
            .parse::<RoomType>()
            .map_err(|err| RoomValidationError::UnknownRoomType { tag: err.0 })?;
        Room::new(room_type, RoomNumber::new(number)?, base_price, occupancy, now)
    }
}
