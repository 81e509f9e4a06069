//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the `{success: false, ...}` failure
//! envelope with a consistent status code.

use actix_web::dev::ServiceResponse;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of internal failure details.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Failure envelope written for every domain error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Stable machine-readable code.
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    /// Build the envelope for `error`, redacting internal failures unless
    /// `expose_internal` is set.
    #[must_use]
    pub fn from_error(error: &Error, expose_internal: bool) -> Self {
        let redact = !expose_internal && matches!(error.code(), ErrorCode::InternalError);
        Self {
            success: false,
            error: if redact {
                REDACTED_MESSAGE.to_owned()
            } else {
                error.message().to_owned()
            },
            code: error.code(),
            trace_id: error.trace_id().map(str::to_owned),
            details: if redact { None } else { error.details().cloned() },
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidArgument | ErrorCode::DuplicateKey => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn envelope_response(error: &Error, expose_internal: bool) -> HttpResponse {
    let mut builder = HttpResponse::build(status_for(error.code()));
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    builder.json(ErrorEnvelope::from_error(error, expose_internal))
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(
                error_message = self.message(),
                trace_id = self.trace_id(),
                "internal error returned to client"
            );
        }
        envelope_response(self, false)
    }
}

/// Middleware that rewrites 500 responses with the unredacted domain message.
///
/// Wrap the app with `internal_error_exposure(true)` only in development;
/// with `false` every response passes through untouched.
pub fn internal_error_exposure<B: 'static>(expose: bool) -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, move |res| {
        expose_internal_message(res, expose)
    })
}

fn expose_internal_message<B>(
    res: ServiceResponse<B>,
    expose: bool,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let exposed = if expose {
        res.response()
            .error()
            .and_then(|err| err.as_error::<Error>())
            .map(|err| envelope_response(err, true))
    } else {
        None
    };

    Ok(ErrorHandlerResponse::Response(match exposed {
        Some(response) => {
            let (req, _) = res.into_parts();
            ServiceResponse::new(req, response).map_into_right_body()
        }
        None => res.map_into_left_body(),
    }))
}

/// Map malformed JSON bodies, query strings and paths onto the envelope.
pub fn extractor_error(err: impl std::fmt::Display, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_argument(err.to_string()).into()
}

#[cfg(test)]
mod tests;
