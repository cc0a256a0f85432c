pub mod health;
mod patient;
pub mod root;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// Build patient routes
pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patients/", post(patient::create))
        .route(
            "/patients/{patient_id}",
            get(patient::read)
                .put(patient::update)
                .delete(patient::delete),
        )
}
