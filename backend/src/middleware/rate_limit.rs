//! Fixed-window request limiting keyed by client IP.
//!
//! Every client address gets a budget of `max_requests` per `window`. The
//! window opens on the first request and resets once it has elapsed;
//! requests beyond the budget are answered with a `429` error envelope
//! without reaching the wrapped service.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderValue, RETRY_AFTER};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use parking_lot::Mutex;
use tracing::warn;

use crate::domain::Error as DomainError;

/// Message returned once a client exhausts its budget.
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests from this IP, please try again later.";

/// Stale windows are swept once this many clients are tracked.
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct Window {
    opened: Instant,
    count: u32,
}

/// Outcome of recording one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Allowed,
    Rejected { retry_after: Duration },
}

#[derive(Debug)]
struct Windows {
    window: Duration,
    max_requests: u32,
    clients: Mutex<HashMap<IpAddr, Window>>,
}

impl Windows {
    fn admit(&self, client: IpAddr, now: Instant) -> Admission {
        let mut clients = self.clients.lock();
        if clients.len() >= SWEEP_THRESHOLD {
            let window = self.window;
            clients.retain(|_, entry| now.duration_since(entry.opened) < window);
        }
        let entry = clients.entry(client).or_insert(Window {
            opened: now,
            count: 0,
        });
        let elapsed = now.duration_since(entry.opened);
        if elapsed >= self.window {
            *entry = Window {
                opened: now,
                count: 0,
            };
        }
        if entry.count >= self.max_requests {
            return Admission::Rejected {
                retry_after: self.window.saturating_sub(now.duration_since(entry.opened)),
            };
        }
        entry.count += 1;
        Admission::Allowed
    }
}

/// Rate limiting middleware.
///
/// Clones share one set of windows, so construct it once and clone it into
/// each worker's `App`.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use actix_web::App;
/// use hotel_rooms::middleware::RateLimit;
///
/// let limiter = RateLimit::new(Duration::from_secs(900), 100);
/// let _app = App::new().wrap(limiter.clone());
/// ```
#[derive(Debug, Clone)]
pub struct RateLimit {
    windows: Arc<Windows>,
}

impl RateLimit {
    /// Allow `max_requests` per client within each `window`.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            windows: Arc::new(Windows {
                window,
                max_requests,
                clients: Mutex::new(HashMap::new()),
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service,
            windows: Arc::clone(&self.windows),
        }))
    }
}

/// Service wrapper produced by [`RateLimit`].
pub struct RateLimitMiddleware<S> {
    service: S,
    windows: Arc<Windows>,
}

/// Requests without a peer address share one bucket.
fn client_ip(req: &ServiceRequest) -> IpAddr {
    req.peer_addr()
        .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |addr| addr.ip())
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let client = client_ip(&req);
        match self.windows.admit(client, Instant::now()) {
            Admission::Allowed => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Admission::Rejected { retry_after } => Box::pin(async move {
                // Built inside the future so the error picks up the request's trace id.
                let error = DomainError::rate_limited(RATE_LIMITED_MESSAGE);
                warn!(
                    client = %client,
                    path = req.path(),
                    trace_id = error.trace_id(),
                    "rate limit exceeded"
                );
                let mut res = req.error_response(error);
                let seconds = retry_after.as_secs().max(1);
                res.headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from(seconds));
                Ok(res.map_into_right_body())
            }),
        }
    }
}
