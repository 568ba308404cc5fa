use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Not Found",
    "message": "department 550e8400-e29b-41d4-a716-446655440000 not found",
    "timestamp": "2026-01-12T10:30:00.000Z"
}))]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Not Found", "Conflict")
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable error description
    pub message: String,
    /// ISO 8601 timestamp when the error occurred
    #[schema(example = "2026-01-12T10:30:00.000Z")]
    pub timestamp: String,
}

/// Error taxonomy at the HTTP boundary.
///
/// Store-level failures are mapped into these kinds instead of being
/// forwarded raw: constraint violations become [`ApiError::Conflict`],
/// missed lookups become [`ApiError::NotFound`], and anything else from
/// the store stays a [`ApiError::Database`] with a generic client message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream dependency failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Translate a store error, pulling constraint violations out of the
    /// generic database bucket so clients see 409 instead of 500.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                ApiError::Conflict(format!("unique constraint violated: {detail}"))
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(detail)) => {
                ApiError::Conflict(format!("foreign key constraint violated: {detail}"))
            }
            _ => ApiError::Database(err),
        }
    }

    pub fn not_found(resource: &str, key: impl std::fmt::Display) -> Self {
        ApiError::NotFound(format!("{resource} {key}"))
    }

    /// Single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message suitable for clients. Internal failures answer with a
    /// generic message; the detail only reaches the logs.
    pub fn response_message(&self) -> String {
        match self {
            Self::Database(_) => "Database error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_stable() {
        assert_eq!(
            ApiError::NotFound("department x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Upstream("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Internal("oops".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_stays_out_of_the_response() {
        let err = ApiError::Database(DbErr::Custom("secret pool detail".into()));
        assert_eq!(err.response_message(), "Database error");

        let err = ApiError::Internal("stack detail".into());
        assert_eq!(err.response_message(), "Internal server error");
    }

    #[test]
    fn user_facing_errors_keep_their_message() {
        let err = ApiError::not_found("employee", "abc");
        assert_eq!(err.response_message(), "employee abc not found");
    }
}
