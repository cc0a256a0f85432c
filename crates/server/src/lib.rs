//! diagnosis-server library crate
//!
//! Exposes `build_app`, `config` and the storage seam for integration tests.
//! The actual binary entrypoint is in `main.rs`.
//!
//! Tests under `tests/api.rs` run against an in-memory provider. The
//! Postgres tests in `tests/integration.rs` start a `postgres` container and
//! are `#[ignore]`d; run them with `cargo test -- --ignored` where Docker is
//! available.

pub mod config;
pub mod db;
pub mod error;
mod extract;
mod middleware;
mod routes;

use std::sync::Arc;

use axum::{Router, middleware as axum_mw, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::ConnectionProvider;

pub use middleware::request_id::REQUEST_ID_HEADER;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ConnectionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(provider: Arc<dyn ConnectionProvider>, config: &Config) -> Router {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::check))
        .merge(routes::patient_routes())
        .with_state(AppState::new(provider))
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
