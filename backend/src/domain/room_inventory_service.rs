//! In-memory room inventory.
//!
//! [`RoomInventoryService`] is the sole owner of [`Room`] values and
//! implements both driving ports. One `RwLock` guards the collection: reads
//! share it, commands hold it exclusively across check-then-mutate.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{
    CreateRoomRequest, DeletedRoom, PriceQuote, PriceQuoteRequest, RoomCommand, RoomQuery,
    UpdateAvailabilityRequest, UpdateRoomRequest,
};
use crate::domain::{
    Error, Room, RoomFactory, RoomSearchCriteria, RoomSnapshot, RoomStatistics,
    RoomValidationError, resolve_strategy,
};

/// Rooms present at startup: `(type, number, base price, occupancy)`.
const SEED_ROOMS: [(&str, &str, f64, i64); 8] = [
    ("simple", "101", 50.0, 1),
    ("simple", "102", 50.0, 1),
    ("double", "201", 80.0, 2),
    ("double", "202", 80.0, 2),
    ("executive", "301", 120.0, 2),
    ("executive", "302", 120.0, 2),
    ("suite", "401", 200.0, 4),
    ("suite", "402", 200.0, 4),
];

fn room_not_found(room_id: Uuid) -> Error {
    Error::not_found(format!("Room with ID {room_id} not found"))
}

/// Authoritative room collection in insertion order.
pub struct RoomInventoryService {
    rooms: RwLock<Vec<Room>>,
    clock: Arc<dyn Clock>,
}

impl RoomInventoryService {
    /// Create an empty inventory.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Create an inventory holding the eight startup rooms.
    ///
    /// # Errors
    /// Propagates [`RoomValidationError`] if a seed entry is rejected.
    pub fn with_seed_rooms(clock: Arc<dyn Clock>) -> Result<Self, RoomValidationError> {
        let now = clock.utc();
        let rooms = SEED_ROOMS
            .into_iter()
            .map(|(tag, number, base_price, occupancy)| {
                RoomFactory::create_room(tag, number, base_price, Some(occupancy), now)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rooms: RwLock::new(rooms),
            clock,
        })
    }

    async fn collect_where(&self, predicate: impl Fn(&Room) -> bool) -> Vec<RoomSnapshot> {
        self.rooms
            .read()
            .await
            .iter()
            .filter(|&room| predicate(room))
            .map(Room::snapshot)
            .collect()
    }

    async fn mutate<F>(&self, room_id: Uuid, apply: F) -> Result<RoomSnapshot, Error>
    where
        F: FnOnce(&mut Room) -> Result<(), RoomValidationError> + Send,
    {
        let mut rooms = self.rooms.write().await;
        let room = rooms
            .iter_mut()
            .find(|room| room.id() == room_id)
            .ok_or_else(|| room_not_found(room_id))?;
        apply(room)?;
        Ok(room.snapshot())
    }
}

#[async_trait]
impl RoomCommand for RoomInventoryService {
    async fn create_room(&self, request: CreateRoomRequest) -> Result<RoomSnapshot, Error> {
        let mut rooms = self.rooms.write().await;
        if rooms
            .iter()
            .any(|room| room.number().as_str() == request.number)
        {
            return Err(Error::duplicate_key(format!(
                "Room number {} already exists",
                request.number
            ))
            .with_details(serde_json::json!({ "field": "number" })));
        }

        let room = RoomFactory::create_room(
            &request.room_type,
            &request.number,
            request.base_price,
            request.occupancy,
            self.clock.utc(),
        )?;
        let snapshot = room.snapshot();
        rooms.push(room);
        Ok(snapshot)
    }

    async fn update_room(&self, request: UpdateRoomRequest) -> Result<RoomSnapshot, Error> {
        let now = self.clock.utc();
        let update = request.update;
        self.mutate(request.room_id, move |room| room.apply_update(&update, now))
            .await
    }

    async fn update_availability(
        &self,
        request: UpdateAvailabilityRequest,
    ) -> Result<RoomSnapshot, Error> {
        let now = self.clock.utc();
        self.mutate(request.room_id, move |room| {
            room.update_status(request.is_available, now);
            Ok(())
        })
        .await
    }

    async fn delete_room(&self, room_id: Uuid) -> Result<DeletedRoom, Error> {
        let mut rooms = self.rooms.write().await;
        let index = rooms
            .iter()
            .position(|room| room.id() == room_id)
            .ok_or_else(|| room_not_found(room_id))?;
        let room = rooms.remove(index);
        let number = room.number().to_string();
        Ok(DeletedRoom {
            id: room.id(),
            message: format!("Room {number} deleted successfully"),
            number,
        })
    }
}

#[async_trait]
impl RoomQuery for RoomInventoryService {
    async fn list_rooms(&self) -> Result<Vec<RoomSnapshot>, Error> {
        Ok(self.collect_where(|_| true).await)
    }

    async fn find_room(&self, room_id: Uuid) -> Result<Option<RoomSnapshot>, Error> {
        Ok(self
            .rooms
            .read()
            .await
            .iter()
            .find(|room| room.id() == room_id)
            .map(Room::snapshot))
    }

    async fn find_room_by_number(&self, number: String) -> Result<Option<RoomSnapshot>, Error> {
        Ok(self
            .rooms
            .read()
            .await
            .iter()
            .find(|room| room.number().as_str() == number)
            .map(Room::snapshot))
    }

    async fn rooms_by_type(&self, label: String) -> Result<Vec<RoomSnapshot>, Error> {
        Ok(self
            .collect_where(|room| room.room_type().matches_label(&label))
            .await)
    }

    async fn available_rooms(&self) -> Result<Vec<RoomSnapshot>, Error> {
        Ok(self.collect_where(Room::is_available).await)
    }

    async fn occupied_rooms(&self) -> Result<Vec<RoomSnapshot>, Error> {
        Ok(self.collect_where(|room| !room.is_available()).await)
    }

    async fn calculate_price(&self, request: PriceQuoteRequest) -> Result<PriceQuote, Error> {
        let rooms = self.rooms.read().await;
        let room = rooms
            .iter()
            .find(|room| room.id() == request.room_id)
            .ok_or_else(|| room_not_found(request.room_id))?;
        let (season, strategy) = resolve_strategy(&request.season);
        Ok(PriceQuote {
            room_id: room.id(),
            season,
            price: room.price_with(strategy, request.dates.as_ref()),
        })
    }

    async fn statistics(&self) -> Result<RoomStatistics, Error> {
        Ok(RoomStatistics::from_rooms(self.rooms.read().await.iter()))
    }

    async fn search(&self, criteria: RoomSearchCriteria) -> Result<Vec<RoomSnapshot>, Error> {
        Ok(self.collect_where(|room| criteria.matches(room)).await)
    }
}

#[cfg(test)]
#[path = "room_inventory_service_tests.rs"]
mod tests;
