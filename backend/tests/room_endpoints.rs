//! End-to-end behaviour of the room REST API.
//!
//! The router is assembled from the library's public pieces exactly as the
//! server does, backed either by a seeded in-memory inventory or by a
//! deterministic failing query port.

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use hotel_rooms::Trace;
use hotel_rooms::domain::ports::{PriceQuote, PriceQuoteRequest, RoomQuery};
use hotel_rooms::domain::{
    Error, RoomInventoryService, RoomSearchCriteria, RoomSnapshot, RoomStatistics,
};
use hotel_rooms::inbound::http::error::internal_error_exposure;
use hotel_rooms::inbound::http::health::{HealthState, health};
use hotel_rooms::inbound::http::index::{index, route_not_found};
use hotel_rooms::inbound::http::rooms;
use hotel_rooms::inbound::http::state::HttpState;
use hotel_rooms::middleware::RateLimit;
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use uuid::Uuid;

// -----------------------------------------------------------------------------
// Test doubles for driving ports
// -----------------------------------------------------------------------------

struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Query port whose every read fails with the same internal error.
struct BrokenRoomQuery;

const BROKEN_MESSAGE: &str = "room index unavailable";

fn broken<T>() -> Result<T, Error> {
    Err(Error::internal(BROKEN_MESSAGE))
}

#[async_trait]
impl RoomQuery for BrokenRoomQuery {
    async fn list_rooms(&self) -> Result<Vec<RoomSnapshot>, Error> {
        broken()
    }

    async fn find_room(&self, _room_id: Uuid) -> Result<Option<RoomSnapshot>, Error> {
        broken()
    }

    async fn find_room_by_number(&self, _number: String) -> Result<Option<RoomSnapshot>, Error> {
        broken()
    }

    async fn rooms_by_type(&self, _label: String) -> Result<Vec<RoomSnapshot>, Error> {
        broken()
    }

    async fn available_rooms(&self) -> Result<Vec<RoomSnapshot>, Error> {
        broken()
    }

    async fn occupied_rooms(&self) -> Result<Vec<RoomSnapshot>, Error> {
        broken()
    }

    async fn calculate_price(&self, _request: PriceQuoteRequest) -> Result<PriceQuote, Error> {
        broken()
    }

    async fn statistics(&self) -> Result<RoomStatistics, Error> {
        broken()
    }

    async fn search(&self, _criteria: RoomSearchCriteria) -> Result<Vec<RoomSnapshot>, Error> {
        broken()
    }
}

// -----------------------------------------------------------------------------
// Fixtures
// -----------------------------------------------------------------------------

#[fixture]
fn inventory() -> Arc<RoomInventoryService> {
    let now = Utc
        .with_ymd_and_hms(2026, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Arc::new(
        RoomInventoryService::with_seed_rooms(Arc::new(FrozenClock(now)))
            .expect("seed rooms are valid"),
    )
}

fn router(
    state: HttpState,
    expose_internal_errors: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(state))
        .wrap(internal_error_exposure(expose_internal_errors))
        .wrap(RateLimit::new(Duration::from_secs(900), 1_000))
        .wrap(Trace)
        .service(index)
        .service(health)
        .configure(rooms::configure)
        .default_service(web::to(route_not_found))
}

// -----------------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------------

#[rstest]
#[actix_web::test]
async fn room_lifecycle_is_reflected_in_statistics(inventory: Arc<RoomInventoryService>) {
    let app = actix_test::init_service(router(HttpState::from_inventory(inventory), false)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/rooms")
            .set_json(json!({"type": "executive", "number": "303", "basePrice": 150.0}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(created).await;
    let id = created["data"]["id"]
        .as_str()
        .expect("room id")
        .to_owned();
    assert_eq!(created["data"]["createdAt"], created["data"]["updatedAt"]);

    let quote: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/rooms/{id}/price?season=high"))
            .to_request(),
    )
    .await;
    assert_eq!(quote["data"]["season"], "high");
    assert_eq!(quote["data"]["price"], json!(150.0_f64 * 1.3));

    let occupied: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/rooms/{id}/availability"))
            .set_json(json!({"isAvailable": false}))
            .to_request(),
    )
    .await;
    assert_eq!(
        occupied["message"],
        "Room 303 availability updated to occupied"
    );

    let stats: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/rooms/stats/statistics")
            .to_request(),
    )
    .await;
    assert_eq!(stats["data"]["total"], 9);
    assert_eq!(stats["data"]["available"], 8);
    assert_eq!(stats["data"]["occupied"], 1);
    assert_eq!(
        stats["data"]["byType"]["executive"],
        json!({"total": 3, "available": 2, "occupied": 1})
    );

    let deleted: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/rooms/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted["message"], "Room 303 deleted successfully");

    let stats: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/rooms/stats/statistics")
            .to_request(),
    )
    .await;
    assert_eq!(stats["data"]["total"], 8);
    assert_eq!(stats["data"]["occupied"], 0);
}

#[rstest]
#[actix_web::test]
async fn duplicate_numbers_leave_inventory_untouched(inventory: Arc<RoomInventoryService>) {
    let app = actix_test::init_service(router(HttpState::from_inventory(inventory), false)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/rooms")
            .set_json(json!({"type": "suite", "number": "401", "basePrice": 999.0}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "duplicate_key");

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/rooms").to_request(),
    )
    .await;
    assert_eq!(listed["count"], 8);
}

#[rstest]
#[actix_web::test]
async fn search_over_seed_selects_available_doubles(inventory: Arc<RoomInventoryService>) {
    let app = actix_test::init_service(router(HttpState::from_inventory(inventory), false)).await;

    let body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/rooms/search?type=double&isAvailable=true&minPrice=80")
            .to_request(),
    )
    .await;

    let numbers: Vec<&str> = body["data"]
        .as_array()
        .expect("room list")
        .iter()
        .filter_map(|room| room["number"].as_str())
        .collect();
    assert_eq!(numbers, ["201", "202"]);
    assert_eq!(body["count"], 2);
}

#[rstest]
#[case(false, "Internal server error")]
#[case(true, BROKEN_MESSAGE)]
#[actix_web::test]
async fn internal_errors_honour_exposure_setting(
    inventory: Arc<RoomInventoryService>,
    #[case] expose: bool,
    #[case] expected: &str,
) {
    let state = HttpState::new(inventory, Arc::new(BrokenRoomQuery));
    let app = actix_test::init_service(router(state, expose)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/rooms/stats/statistics")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["traceId"].as_str(), header.as_deref());
}

#[rstest]
#[actix_web::test]
async fn index_and_health_describe_the_service(inventory: Arc<RoomInventoryService>) {
    let app = actix_test::init_service(router(HttpState::from_inventory(inventory), false)).await;

    let index_body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/").to_request(),
    )
    .await;
    assert_eq!(
        index_body["message"],
        "Hotel Room Management System - Matecaña Airport"
    );
    assert_eq!(index_body["endpoints"]["rooms"], "/api/rooms");

    let health_body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert_eq!(health_body["status"], "OK");
    assert_eq!(health_body["service"], index_body["message"]);
}
