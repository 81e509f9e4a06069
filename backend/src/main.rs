//! Backend entry-point: loads settings, seeds the inventory and serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotel_rooms::domain::RoomInventoryService;
use hotel_rooms::inbound::http::health::HealthState;
use hotel_rooms::inbound::http::state::HttpState;
use server::{ServerConfig, ServerSettings, create_server, watch_shutdown};

const ENDPOINTS: [&str; 12] = [
    "GET    /api/rooms",
    "POST   /api/rooms",
    "GET    /api/rooms/available",
    "GET    /api/rooms/occupied",
    "GET    /api/rooms/search",
    "GET    /api/rooms/stats/statistics",
    "GET    /api/rooms/type/{type}",
    "GET    /api/rooms/{id}",
    "PUT    /api/rooms/{id}",
    "DELETE /api/rooms/{id}",
    "GET    /api/rooms/{id}/price",
    "PUT    /api/rooms/{id}/availability",
];

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;

    let inventory = RoomInventoryService::with_seed_rooms(Arc::new(DefaultClock))
        .map_err(|e| std::io::Error::other(format!("failed to seed room inventory: {e}")))?;
    let http_state = HttpState::from_inventory(Arc::new(inventory));

    let health_state = web::Data::new(HealthState::new());
    let (server, bound) = create_server(health_state.clone(), http_state, config)?;
    watch_shutdown(health_state);

    info!(address = %bound, "room inventory service listening");
    for endpoint in ENDPOINTS {
        info!(endpoint, "route registered");
    }
    let docs = cfg!(debug_assertions).then(|| format!("http://{bound}/docs/"));
    info!(
        health = %format!("http://{bound}/health"),
        docs = ?docs,
        "auxiliary endpoints"
    );

    server.await
}
