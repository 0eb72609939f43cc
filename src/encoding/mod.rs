//! # Response Encoding
//!
//! Serializes store values into JSON, XML or plain text.
//!
//! The store never sees these types: handlers pick a [`Format`] per request
//! and hand its [`Encoder`] the plain values.

mod json;
mod text;
mod xml;

use axum::http::{header, HeaderMap};
use serde::Serialize;
use thiserror::Error;

use crate::store::Food;

pub use json::JsonEncoder;
pub use text::TextEncoder;
pub use xml::XmlEncoder;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodingError>;

/// Encoding errors
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error payload returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A serialization capability
pub trait Encoder: Send + Sync {
    /// Value for the `Content-Type` response header
    fn content_type(&self) -> &'static str;

    fn encode_food(&self, food: &Food) -> EncodeResult<String>;

    fn encode_foods(&self, foods: &[Food]) -> EncodeResult<String>;

    fn encode_error(&self, error: &ErrorBody) -> EncodeResult<String>;
}

/// Supported response formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Xml,
    Text,
}

impl Format {
    /// Pick a format from the `Accept` header.
    ///
    /// Media types are tried in the order the client lists them; anything
    /// unrecognized falls back to JSON.
    pub fn negotiate(headers: &HeaderMap) -> Self {
        headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::from_accept)
            .unwrap_or_default()
    }

    fn from_accept(accept: &str) -> Option<Self> {
        accept
            .split(',')
            .filter_map(|part| part.split(';').next())
            .map(str::trim)
            .find_map(Self::from_media_type)
    }

    fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "application/json" => Some(Format::Json),
            "application/xml" | "text/xml" => Some(Format::Xml),
            "text/plain" => Some(Format::Text),
            _ => None,
        }
    }

    /// The encoder implementing this format
    pub fn encoder(self) -> &'static dyn Encoder {
        match self {
            Format::Json => &JsonEncoder,
            Format::Xml => &XmlEncoder,
            Format::Text => &TextEncoder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_negotiate_defaults_to_json() {
        assert_eq!(Format::negotiate(&HeaderMap::new()), Format::Json);
        assert_eq!(Format::negotiate(&accept("*/*")), Format::Json);
        assert_eq!(Format::negotiate(&accept("image/png")), Format::Json);
    }

    #[test]
    fn test_negotiate_known_types() {
        assert_eq!(Format::negotiate(&accept("application/xml")), Format::Xml);
        assert_eq!(Format::negotiate(&accept("text/xml")), Format::Xml);
        assert_eq!(Format::negotiate(&accept("text/plain")), Format::Text);
    }

    #[test]
    fn test_negotiate_uses_first_known_type() {
        let headers = accept("text/html, text/plain;q=0.9, application/json;q=0.8");
        assert_eq!(Format::negotiate(&headers), Format::Text);
    }

    #[test]
    fn test_encoder_content_types() {
        assert_eq!(Format::Json.encoder().content_type(), "application/json");
        assert_eq!(
            Format::Xml.encoder().content_type(),
            "application/xml; charset=utf-8"
        );
        assert_eq!(
            Format::Text.encoder().content_type(),
            "text/plain; charset=utf-8"
        );
    }
}
