//! Postgres-backed connection provider

use async_trait::async_trait;
use deadpool_postgres::{Config, Object, Pool, Runtime};
use diagnosis_core::Patient;
use tokio_postgres::NoTls;

use super::{ConnectionProvider, PatientRepository};
use crate::error::AppError;

const INSERT_PATIENT: &str = "INSERT INTO Patients (id, diagnosis) VALUES ($1, $2)";
const SELECT_PATIENT: &str = "SELECT id, diagnosis FROM Patients WHERE id = $1 LIMIT 1";
const UPDATE_DIAGNOSIS: &str = "UPDATE Patients SET diagnosis = $1 WHERE id = $2";
const DELETE_PATIENT: &str = "DELETE FROM Patients WHERE id = $1";

/// Create a connection pool from a database URL
pub async fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Hands out pooled Postgres connections
#[derive(Clone)]
pub struct PgProvider {
    pool: Pool,
}

impl PgProvider {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionProvider for PgProvider {
    async fn acquire(&self) -> Result<Box<dyn PatientRepository>, AppError> {
        let client = self.pool.get().await?;
        Ok(Box::new(PgRepository { client }))
    }
}

/// One pooled client; returned to the pool on drop.
struct PgRepository {
    client: Object,
}

#[async_trait]
impl PatientRepository for PgRepository {
    async fn insert(&mut self, patient: &Patient) -> Result<(), AppError> {
        let tx = self.client.transaction().await?;
        let result = tx
            .execute(INSERT_PATIENT, &[&patient.id, &patient.diagnosis])
            .await;

        match result {
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(AppError::Internal(format!("Error inserting patient: {}", err)))
            }
        }
    }

    async fn find(&mut self, id: &str) -> Result<Option<Patient>, AppError> {
        let row = self.client.query_opt(SELECT_PATIENT, &[&id]).await?;

        Ok(row.map(|row| Patient {
            id: row.get("id"),
            diagnosis: row.get("diagnosis"),
        }))
    }

    async fn update_diagnosis(&mut self, id: &str, diagnosis: &str) -> Result<u64, AppError> {
        let tx = self.client.transaction().await?;
        let affected = tx.execute(UPDATE_DIAGNOSIS, &[&diagnosis, &id]).await?;
        tx.commit().await?;
        Ok(affected)
    }

    async fn delete(&mut self, id: &str) -> Result<u64, AppError> {
        let tx = self.client.transaction().await?;
        let affected = tx.execute(DELETE_PATIENT, &[&id]).await?;
        tx.commit().await?;
        Ok(affected)
    }

    async fn ping(&mut self) -> Result<(), AppError> {
        self.client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}
