//! Mapping of service errors onto HTTP status codes and the failure envelope.

use agentdesk_common::ApiResponse;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::{CliError, RecordError, StoreError};

/// A failed request: status code plus the message placed in `error`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// `404` with `"<label> not found"`.
    pub fn not_found(label: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{label} not found"))
    }

    fn internal(err: &dyn std::error::Error) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::err(self.message))).into_response()
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        match &err {
            RecordError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            RecordError::Conflict { .. } => Self::new(StatusCode::CONFLICT, err.to_string()),
            RecordError::Validation { .. } => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            RecordError::Storage(_) => Self::internal(&err),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::internal(&err)
    }
}

impl From<CliError> for ApiError {
    fn from(err: CliError) -> Self {
        match &err {
            CliError::InvalidRequest(_) => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            CliError::Timeout { .. } => Self::new(StatusCode::GATEWAY_TIMEOUT, err.to_string()),
            CliError::Spawn { .. } | CliError::Wait { .. } => Self::internal(&err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("invalid request body: {}", rejection.body_text()),
        )
    }
}
