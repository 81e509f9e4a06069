//! Service index and unmatched-route fallback.

use actix_web::{HttpRequest, HttpResponse, get};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::health::SERVICE_NAME;

/// Top-level endpoint map advertised by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    #[schema(example = "/api/rooms")]
    pub rooms: String,
    #[schema(example = "/health")]
    pub health: String,
}

/// Index body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IndexBody {
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub endpoints: EndpointMap,
}

/// Describe the service and its entry points.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service description", body = IndexBody)),
    tags = ["index"]
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(IndexBody {
        message: SERVICE_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        endpoints: EndpointMap {
            rooms: "/api/rooms".to_owned(),
            health: "/health".to_owned(),
        },
    })
}

/// Default service for requests no route matched.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::not_found("Route not found").with_details(json!({ "path": req.uri().to_string() })))
}
