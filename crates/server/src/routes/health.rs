//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::AppState;

const CONNECTION_FAILED: &str = "Database connection failed";
const QUERY_FAILED: &str = "Database query failed";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl HealthResponse {
    fn unhealthy(reason: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Self {
                status: "unhealthy".to_string(),
                reason: Some(reason.to_string()),
            }),
        )
    }
}

/// GET /health - Check database connectivity and return server health status
pub async fn check(State(state): State<AppState>) -> impl IntoResponse {
    let mut conn = match state.provider.acquire().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(error = %e, "Health check connection error");
            return HealthResponse::unhealthy(CONNECTION_FAILED);
        }
    };

    match conn.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                reason: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check query failed");
            HealthResponse::unhealthy(QUERY_FAILED)
        }
    }
}
