//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::RoomInventoryService;
use crate::inbound::http::state::HttpState;

/// Clock frozen at a fixed instant.
pub struct FixtureClock(pub DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant every fixture clock reports.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// HTTP state backed by a freshly seeded in-memory inventory.
pub fn seeded_state() -> HttpState {
    let inventory = RoomInventoryService::with_seed_rooms(Arc::new(FixtureClock(
        fixture_timestamp(),
    )))
    .expect("seed rooms are valid");
    HttpState::from_inventory(Arc::new(inventory))
}
