//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ROOMS_*` environment variables, or an
//! optional config file; unset values fall back to the defaults below.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use actix_web::http::Uri;
use actix_web::http::header::HeaderValue;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_RATE_LIMIT_WINDOW_MS: u64 = 15 * 60 * 1000;
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;

/// Failures raised while loading or validating [`ServerSettings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("failed to load server settings: {0}")]
    Load(String),
    #[error("invalid host address: {0}")]
    InvalidHost(String),
    #[error("CORS origin is not a valid origin: {0}")]
    InvalidCorsOrigin(String),
    #[error("rate limit window must be greater than 0 ms")]
    ZeroRateLimitWindow,
    #[error("rate limit must allow at least one request")]
    ZeroRateLimitRequests,
}

/// Raw configuration values for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROOMS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port; `0` asks the OS for an ephemeral port.
    pub port: Option<u16>,
    /// Browser origin granted CORS access; `*` allows any origin.
    pub cors_origin: Option<String>,
    /// Rate limit window length in milliseconds.
    pub rate_limit_window_ms: Option<u64>,
    /// Requests each client may make per window.
    pub rate_limit_max_requests: Option<u32>,
    /// Return unredacted internal error messages to clients.
    #[ortho_config(default = false)]
    pub expose_internal_errors: bool,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_args(std::env::args_os())
    }

    /// Load settings from an explicit argument list.
    pub fn load_from_args<I>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let settings =
            Self::load_from_iter(args).map_err(|err| SettingsError::Load(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.bind_addr()?;
        let origin = self.cors_origin();
        if HeaderValue::from_str(origin).is_err() || origin.parse::<Uri>().is_err() {
            return Err(SettingsError::InvalidCorsOrigin(origin.to_owned()));
        }
        if self.rate_limit_window().is_zero() {
            return Err(SettingsError::ZeroRateLimitWindow);
        }
        if self.rate_limit_max_requests() == 0 {
            return Err(SettingsError::ZeroRateLimitRequests);
        }
        Ok(())
    }

    /// Socket address to bind, combining host and port.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref() {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| SettingsError::InvalidHost(raw.to_owned()))?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    pub fn cors_origin(&self) -> &str {
        self.cors_origin.as_deref().unwrap_or(DEFAULT_CORS_ORIGIN)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_millis(
            self.rate_limit_window_ms
                .unwrap_or(DEFAULT_RATE_LIMIT_WINDOW_MS),
        )
    }

    pub fn rate_limit_max_requests(&self) -> u32 {
        self.rate_limit_max_requests
            .unwrap_or(DEFAULT_RATE_LIMIT_MAX_REQUESTS)
    }
}
