//! HTTP-facing error type.
//!
//! Every failure leaving a handler is an [`AppError`], rendered as
//! `{"error": {"code", "message", "details"}}` with a matching status code.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::ServiceError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Gone { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Gone { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Gone { message, details } => ("gone", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::LongUrlRequired => {
                AppError::bad_request(message, json!({ "field": "longUrl" }))
            }
            ServiceError::ShortUrlRequired => {
                AppError::bad_request(message, json!({ "field": "shortUrl" }))
            }
            ServiceError::IdRequired => AppError::bad_request(message, json!({ "field": "id" })),
            ServiceError::InvalidEntity(_) => AppError::bad_request(message, json!({})),
            ServiceError::CustomUrlExists => AppError::conflict(message, json!({})),
            ServiceError::NotFound => AppError::not_found(message, json!({})),
            ServiceError::NotActiveOrExpired => AppError::gone(message, json!({})),
            ServiceError::GenerationFailed(_) | ServiceError::Store(_) => {
                tracing::error!(error = %message, "Request failed");
                AppError::internal("Internal server error", json!({}))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id_generator::GenerationError;
    use crate::domain::repositories::StoreError;

    #[test]
    fn test_service_error_status_mapping() {
        let cases = [
            (ServiceError::LongUrlRequired, StatusCode::BAD_REQUEST),
            (ServiceError::ShortUrlRequired, StatusCode::BAD_REQUEST),
            (ServiceError::IdRequired, StatusCode::BAD_REQUEST),
            (ServiceError::CustomUrlExists, StatusCode::CONFLICT),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::NotActiveOrExpired, StatusCode::GONE),
            (
                ServiceError::GenerationFailed(GenerationError::Exhausted { attempts: 10 }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Store(StoreError::Persistence("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::from(ServiceError::Store(StoreError::Persistence(
            "connection refused at 10.0.0.3".to_string(),
        )));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::from(ServiceError::LongUrlRequired);
        assert_eq!(err.to_string(), "longUrl is required");
    }
}
