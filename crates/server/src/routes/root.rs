//! Root endpoint handler

use axum::Json;
use diagnosis_core::Message;

/// GET / - Return the welcome message
pub async fn welcome() -> Json<Message> {
    Json(Message::welcome())
}
