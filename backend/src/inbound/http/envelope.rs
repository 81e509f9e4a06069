//! Success envelope shared by every room endpoint.
//!
//! Responses take the shape `{success: true, data?, count?, message?, ...}`;
//! extra top-level keys (`type`, `criteria`) are merged in by
//! [`Envelope::with_extra`].

use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::{Map, Value};

/// Success envelope around an optional payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            extra: Map::new(),
        }
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an extra top-level key.
    #[must_use]
    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_owned(), value);
        self
    }

    /// 200 response carrying the envelope.
    pub fn ok(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }

    /// 201 response carrying the envelope.
    pub fn created(self) -> HttpResponse {
        HttpResponse::Created().json(self)
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Wrap a list and record its length in `count`.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::data(items)
        }
    }
}

impl Envelope<()> {
    /// Envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
            extra: Map::new(),
        }
    }
}
