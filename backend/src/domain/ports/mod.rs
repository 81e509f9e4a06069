//! Driving ports exposed by the room inventory.
//!
//! Inbound adapters depend on these traits rather than on
//! [`crate::domain::RoomInventoryService`] so handlers can be exercised
//! against mocks.

mod room_command;
mod room_query;

#[cfg(test)]
pub use room_command::MockRoomCommand;
pub use room_command::{
    CreateRoomRequest, DeletedRoom, RoomCommand, UpdateAvailabilityRequest, UpdateRoomRequest,
};
#[cfg(test)]
pub use room_query::MockRoomQuery;
pub use room_query::{PriceQuote, PriceQuoteRequest, RoomQuery};
