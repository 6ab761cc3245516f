//! REST API error types
//!
//! Every failure is rendered as `{"error": "<message>"}`. The status code
//! depends on the variant; `Rejected` keeps 200 because clients of the
//! user-creation endpoint read the envelope rather than the status.

use et_core::CoreError;
use et_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed request body or query (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Write rejected, reported with status 200
    #[error("Rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The client-facing message, without location details
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Internal { message, .. }
            | ApiError::Rejected { message, .. } => message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected { .. } => StatusCode::OK,
        }
    }

    /// Downgrade any error to `Rejected`, keeping its message.
    #[track_caller]
    pub fn into_rejected(self) -> Self {
        match self {
            ApiError::Rejected { .. } => self,
            other => ApiError::Rejected {
                message: other.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors, keeping the store's own message
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        ApiError::Internal {
            message: e.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidDate { value, .. } => ApiError::Validation {
                message: format!("Invalid date '{}'", value),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
