//! Driving port for room inventory reads.
//!
//! Queries never mutate the inventory and always return snapshots taken at
//! call time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, RoomSearchCriteria, RoomSnapshot, RoomStatistics, Season, StayDates};

/// Request to price one room for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteRequest {
    pub room_id: Uuid,
    /// Season key; unknown keys price as the low season.
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<StayDates>,
}

/// Price of one room under the resolved season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub room_id: Uuid,
    pub season: Season,
    pub price: f64,
}

/// Driving port for room read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomQuery: Send + Sync {
    /// Every room in insertion order.
    async fn list_rooms(&self) -> Result<Vec<RoomSnapshot>, Error>;

    /// One room by id. Absence is `Ok(None)`, not an error.
    async fn find_room(&self, room_id: Uuid) -> Result<Option<RoomSnapshot>, Error>;

    /// One room by number.
    async fn find_room_by_number(&self, number: String) -> Result<Option<RoomSnapshot>, Error>;

    /// Rooms whose type tag matches `label` case-insensitively.
    ///
    /// Unknown labels yield an empty list.
    async fn rooms_by_type(&self, label: String) -> Result<Vec<RoomSnapshot>, Error>;

    /// Rooms currently available.
    async fn available_rooms(&self) -> Result<Vec<RoomSnapshot>, Error>;

    /// Rooms currently occupied.
    async fn occupied_rooms(&self) -> Result<Vec<RoomSnapshot>, Error>;

    /// Prices one room. Fails with `NotFound` for an unknown id.
    async fn calculate_price(&self, request: PriceQuoteRequest) -> Result<PriceQuote, Error>;

    /// Aggregate counts computed from the live collection.
    async fn statistics(&self) -> Result<RoomStatistics, Error>;

    /// Rooms matching every supplied criterion.
    async fn search(&self, criteria: RoomSearchCriteria) -> Result<Vec<RoomSnapshot>, Error>;
}
