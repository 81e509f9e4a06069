//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::future::Future;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use hotel_rooms::Trace;
use hotel_rooms::domain::TRACE_ID_HEADER;
#[cfg(debug_assertions)]
use hotel_rooms::doc::ApiDoc;
use hotel_rooms::inbound::http::error::internal_error_exposure;
use hotel_rooms::inbound::http::health::{HealthState, health, live, ready};
use hotel_rooms::inbound::http::index::{index, route_not_found};
use hotel_rooms::inbound::http::rooms;
use hotel_rooms::inbound::http::state::HttpState;
use hotel_rooms::middleware::RateLimit;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_origin: String,
    rate_limit: RateLimit,
    expose_internal_errors: bool,
}

/// CORS policy for the configured browser origin; answers preflights itself.
fn cors(cors_origin: &str) -> Cors {
    let policy = if cors_origin == "*" {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(cors_origin)
    };
    policy.allowed_methods(["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .expose_headers([TRACE_ID_HEADER])
        .max_age(3600)
}

/// Security headers sent on every response, including errors.
fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add((header::REFERRER_POLICY, "no-referrer"))
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_origin,
        rate_limit,
        expose_internal_errors,
    } = deps;

    // Wrapped last runs first: Trace sees every response, preflights skip the
    // rate limit, CORS and security headers cover 429s.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(internal_error_exposure(expose_internal_errors))
        .wrap(rate_limit)
        .wrap(cors(&cors_origin))
        .wrap(default_headers())
        .wrap(Trace)
        .service(index)
        .service(health)
        .service(ready)
        .service(live)
        .configure(rooms::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `http_state`: driving ports shared by every worker.
/// - `config`: binding, CORS, rate limit and error exposure settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener, and the
/// address it actually bound (useful when the configured port is `0`).
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<(Server, std::net::SocketAddr)> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let ServerConfig {
        bind_addr,
        cors_origin,
        rate_limit,
        expose_internal_errors,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            cors_origin: cors_origin.clone(),
            rate_limit: rate_limit.clone(),
            expose_internal_errors,
        })
    })
    .bind(bind_addr)?;

    let bound = server.addrs().first().copied().unwrap_or(bind_addr);
    let server = server.run();

    health_state.mark_ready();
    Ok((server, bound))
}

/// Fail liveness probes once `signal` resolves so orchestrators see the drain.
async fn fail_liveness_on<S>(signal: S, health_state: web::Data<HealthState>)
where
    S: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            health_state.mark_unhealthy();
            info!("shutdown signal received, liveness now failing");
        }
        Err(e) => warn!(error = %e, "shutdown signal listener failed"),
    }
}

/// Watch for Ctrl-C alongside the server's own signal handling and mark the
/// process unhealthy while it drains.
pub fn watch_shutdown(health_state: web::Data<HealthState>) {
    actix_web::rt::spawn(fail_liveness_on(actix_web::rt::signal::ctrl_c(), health_state));
}
