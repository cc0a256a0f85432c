//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use diagnosis_core::ErrorDetail;
use thiserror::Error;

/// Application error type
///
/// Every failure cause collapses into one of these three; the HTTP body only
/// ever carries a fixed generic detail, the cause goes to the log.
#[derive(Debug, Error)]
pub enum AppError {
    /// No connection could be acquired from the provider.
    #[error("Database connection error: {0}")]
    ServiceUnavailable(String),

    /// No row exists for the given patient id.
    #[error("Patient with ID {0} not found")]
    NotFound(String),

    /// Statement execution failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self {
            AppError::ServiceUnavailable(cause) => {
                tracing::error!(error = %cause, "Database connection error");
                ErrorDetail::connection()
            }
            AppError::NotFound(id) => {
                tracing::warn!(patient_id = %id, "Patient with ID {} not found", id);
                ErrorDetail::not_found()
            }
            AppError::Internal(cause) => {
                tracing::error!(error = %cause, "Database statement failed");
                ErrorDetail::internal()
            }
        };

        (self.status(), Json(detail)).into_response()
    }
}

impl From<deadpool_postgres::PoolError> for AppError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        AppError::ServiceUnavailable(format!("Database pool error: {}", err))
    }
}

impl From<tokio_postgres::Error> for AppError {
    fn from(err: tokio_postgres::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}
