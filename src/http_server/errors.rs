//! # API Errors
//!
//! Maps store outcomes to HTTP status codes and client error bodies.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::encoding::{EncodingError, ErrorBody, Format};
use crate::store::StoreError;

/// Result type for handler operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-facing error codes
pub const ERR_CODE_NOT_EXIST: u16 = 1;
pub const ERR_CODE_ALREADY_EXISTS: u16 = 2;
pub const ERR_CODE_INTERNAL: u16 = 3;
pub const ERR_CODE_BAD_REQUEST: u16 = 4;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or unknown id, kept as the client sent it
    #[error("the food with id {0} does not exist")]
    NotFound(String),

    /// `(name, venue)` already taken
    #[error("the food '{name}' from '{venue}' already exists")]
    AlreadyExists { name: String, venue: String },

    /// Query string that could not be read
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Store fault
    #[error("internal error: {0}")]
    Internal(String),

    /// Response body could not be produced
    #[error("internal error: {0}")]
    Encoding(#[from] EncodingError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) | ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Code carried in the error body
    pub fn error_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => ERR_CODE_NOT_EXIST,
            ApiError::AlreadyExists { .. } => ERR_CODE_ALREADY_EXISTS,
            ApiError::BadRequest(_) => ERR_CODE_BAD_REQUEST,
            ApiError::Internal(_) | ApiError::Encoding(_) => ERR_CODE_INTERNAL,
        }
    }

    /// Faults are logged at ERROR; the rest are ordinary client outcomes
    pub fn is_fault(&self) -> bool {
        self.status_code().is_server_error()
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.error_code(), self.to_string())
    }

    /// Render with the negotiated encoder
    pub fn render(&self, format: Format) -> Response {
        let encoder = format.encoder();
        match encoder.encode_error(&self.body()) {
            Ok(body) => (
                self.status_code(),
                [(header::CONTENT_TYPE, HeaderValue::from_static(encoder.content_type()))],
                body,
            )
                .into_response(),
            Err(_) => (self.status_code(), self.to_string()).into_response(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { name, venue } => ApiError::AlreadyExists { name, venue },
            StoreError::NotFound(id) => ApiError::NotFound(id.to_string()),
            StoreError::LockPoisoned(_) => ApiError::Internal(err.to_string()),
        }
    }
}
