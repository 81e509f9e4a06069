//! Hotel room inventory service.
//!
//! The [`domain`] module owns rooms, seasonal pricing, search and the
//! in-memory inventory behind two driving ports. [`inbound::http`] adapts
//! those ports to a JSON REST API, and [`middleware`] carries the
//! request-scoped concerns shared by every route.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
