mod postgres;
mod repository;

pub use postgres::{PgProvider, create_pool};
pub use repository::{ConnectionProvider, PatientRepository};

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::AppState;
use crate::error::AppError;

/// A connection acquired for the lifetime of one request.
///
/// Extracted before any other handler argument, so an unavailable provider
/// fails the request before the body is even looked at. The connection is
/// released when the handler drops this value.
pub struct DbConn(pub Box<dyn PatientRepository>);

impl<S> FromRequestParts<S> for DbConn
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let provider: Arc<dyn ConnectionProvider> = AppState::from_ref(state).provider;
        let conn = provider.acquire().await?;
        Ok(Self(conn))
    }
}
