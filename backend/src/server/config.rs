//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use hotel_rooms::middleware::RateLimit;

use super::settings::{ServerSettings, SettingsError};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origin: String,
    pub(crate) rate_limit: RateLimit,
    pub(crate) expose_internal_errors: bool,
}

impl ServerConfig {
    /// Construct a server configuration with the default request budget.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cors_origin: impl Into<String>) -> Self {
        Self {
            bind_addr,
            cors_origin: cors_origin.into(),
            rate_limit: RateLimit::new(Duration::from_secs(15 * 60), 100),
            expose_internal_errors: false,
        }
    }

    /// Derive the configuration from loaded settings.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?, settings.cors_origin())
            .with_rate_limit(
                settings.rate_limit_window(),
                settings.rate_limit_max_requests(),
            )
            .with_internal_errors_exposed(settings.expose_internal_errors))
    }

    /// Replace the per-client request budget.
    #[must_use]
    pub fn with_rate_limit(mut self, window: Duration, max_requests: u32) -> Self {
        self.rate_limit = RateLimit::new(window, max_requests);
        self
    }

    /// Return internal error messages to clients unredacted.
    #[must_use]
    pub fn with_internal_errors_exposed(mut self, expose: bool) -> Self {
        self.expose_internal_errors = expose;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
