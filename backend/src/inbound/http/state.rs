//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::RoomInventoryService;
use crate::domain::ports::{RoomCommand, RoomQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub rooms: Arc<dyn RoomCommand>,
    pub rooms_query: Arc<dyn RoomQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(rooms: Arc<dyn RoomCommand>, rooms_query: Arc<dyn RoomQuery>) -> Self {
        Self { rooms, rooms_query }
    }

    /// Serve both ports from one inventory.
    pub fn from_inventory(inventory: Arc<RoomInventoryService>) -> Self {
        Self {
            rooms: inventory.clone(),
            rooms_query: inventory,
        }
    }
}
