//! API error types and JSON response formatting.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use crate::service::ServiceError;
use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details in the response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// No stored record has this hash.
    pub fn save_not_found(hash: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "SAVE_NOT_FOUND",
            format!("No save with hash '{}'", hash),
        )
        .with_details(serde_json::json!({ "hash": hash }))
    }

    /// The server was started without a refresh secret.
    pub fn refresh_not_configured() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "REFRESH_NOT_CONFIGURED",
            "No refresh secret is configured",
        )
    }

    /// The server was started without a backup directory.
    pub fn backup_not_configured() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "BACKUP_NOT_CONFIGURED",
            "No backup store is configured",
        )
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Invalid refresh secret")
    }

    /// Keeps the rejection's status, so an oversized upload stays 413.
    pub fn invalid_multipart(err: MultipartError) -> Self {
        Self::new(err.status(), "INVALID_MULTIPART", err.body_text())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                status = %self.status.as_u16(),
                code = %self.code,
                message = %self.message,
                "server error response"
            );
        } else if self.status.is_client_error() {
            debug!(
                status = %self.status.as_u16(),
                code = %self.code,
                message = %self.message,
                "client error response"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::NotInitialized(path) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_NOT_INITIALIZED",
                format!("Database at '{}' is not initialized", path),
            ),
            StoreError::Json(_) | StoreError::InvalidFormat(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "CORRUPT_RECORD",
                err.to_string(),
            ),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(store) => store.into(),
            ServiceError::BackupNotConfigured => Self::backup_not_configured(),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Worker task failed: {}", err))
    }
}
