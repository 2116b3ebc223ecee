//! # API Errors
//!
//! Error type for the HTTP surface. Every failure is terminal and local to
//! its request: guard failures render an empty body with their status,
//! lookup and validation failures carry a prebuilt JSON:API error document.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::auth::CryptoError;
use crate::jsonapi::{ErrorDocument, MEDIA_TYPE};

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by guards, the resolver, and the handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Guard failures (empty body)
    // ==================
    /// Mutating request without the JSON:API content type.
    #[error("Content type must be the JSON:API media type")]
    NotAcceptable,

    /// `data.type` missing or different from the route's resource type.
    #[error("Resource type does not match the request path")]
    TypeMismatch,

    /// Missing `X-Api-Key` header, or no user holds that token.
    #[error("Missing or invalid API key")]
    Forbidden,

    /// Path names a collection the registry does not know.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    // ==================
    // Structured errors (JSON:API error document)
    // ==================
    /// No record with the requested identifier.
    #[error("Record not found")]
    NotFound(ErrorDocument),

    /// Validation failed on create or update.
    #[error("Validation failed")]
    Validation(ErrorDocument),

    // ==================
    // Server errors
    // ==================
    /// Unexpected internal failure (e.g. password hashing).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::TypeMismatch => StatusCode::CONFLICT,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::UnknownCollection(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The error document, for variants that carry one.
    pub fn document(&self) -> Option<&ErrorDocument> {
        match self {
            ApiError::NotFound(doc) | ApiError::Validation(doc) => Some(doc),
            _ => None,
        }
    }
}

impl From<CryptoError> for ApiError {
    fn from(err: CryptoError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.document() {
            Some(doc) => (
                status,
                [(header::CONTENT_TYPE, MEDIA_TYPE)],
                Json(doc.clone()),
            )
                .into_response(),
            None => status.into_response(),
        }
    }
}
