use async_trait::async_trait;
use diagnosis_core::Patient;

use crate::error::AppError;

/// Yields one live connection per call.
///
/// `Err(AppError::ServiceUnavailable)` signals that no connection can be
/// had right now. How connections are established or pooled is up to the
/// implementation.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn PatientRepository>, AppError>;
}

/// Patient statements over a single connection.
///
/// Each method runs exactly one statement. Write methods commit before
/// returning.
#[async_trait]
pub trait PatientRepository: Send {
    /// Insert a new row. Any failure rolls back and surfaces as `Internal`.
    async fn insert(&mut self, patient: &Patient) -> Result<(), AppError>;

    /// Fetch at most one row by id.
    async fn find(&mut self, id: &str) -> Result<Option<Patient>, AppError>;

    /// Set the diagnosis of the row with `id`; returns the affected row count.
    async fn update_diagnosis(&mut self, id: &str, diagnosis: &str) -> Result<u64, AppError>;

    /// Delete the row with `id`; returns the affected row count.
    async fn delete(&mut self, id: &str) -> Result<u64, AppError>;

    /// Round-trip a trivial query.
    async fn ping(&mut self) -> Result<(), AppError>;
}
