//! Driving port for room inventory mutations.
//!
//! Every command is all-or-nothing: a rejected request leaves the inventory
//! exactly as it was.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, RoomSnapshot, RoomUpdate};

/// Request to add a room to the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// Type tag; must match a known tag exactly.
    #[serde(rename = "type")]
    pub room_type: String,
    pub number: String,
    pub base_price: f64,
    /// Defaults to 2 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<i64>,
}

/// Request to apply a partial update to one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    pub room_id: Uuid,
    pub update: RoomUpdate,
}

/// Request to flip a room's availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub room_id: Uuid,
    pub is_available: bool,
}

/// Confirmation returned once a room has been removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedRoom {
    pub id: Uuid,
    pub number: String,
    /// `Room <number> deleted successfully`.
    pub message: String,
}

/// Driving port for room write operations.
///
/// # Examples
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use mockable::DefaultClock;
/// # use hotel_rooms::domain::RoomInventoryService;
/// # use hotel_rooms::domain::ports::{CreateRoomRequest, RoomCommand};
/// # async fn example() -> Result<(), hotel_rooms::domain::Error> {
/// let service = RoomInventoryService::new(Arc::new(DefaultClock));
/// let room = service
///     .create_room(CreateRoomRequest {
///         room_type: "suite".to_owned(),
///         number: "501".to_owned(),
///         base_price: 250.0,
///         occupancy: None,
///     })
///     .await?;
/// assert_eq!(room.occupancy, 2);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomCommand: Send + Sync {
    /// Validates and appends a new room.
    ///
    /// Fails with `DuplicateKey` when the number is taken and with
    /// `InvalidArgument` for an unknown type, a non-positive price or
    /// occupancy, or a blank number.
    async fn create_room(&self, request: CreateRoomRequest) -> Result<RoomSnapshot, Error>;

    /// Applies the supplied fields of a partial update.
    ///
    /// Fails with `NotFound` for an unknown id and `InvalidArgument` when a
    /// supplied field is rejected.
    async fn update_room(&self, request: UpdateRoomRequest) -> Result<RoomSnapshot, Error>;

    /// Sets the availability flag of one room.
    async fn update_availability(
        &self,
        request: UpdateAvailabilityRequest,
    ) -> Result<RoomSnapshot, Error>;

    /// Removes a room permanently.
    async fn delete_room(&self, room_id: Uuid) -> Result<DeletedRoom, Error>;
}
