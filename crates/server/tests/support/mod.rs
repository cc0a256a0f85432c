//! In-memory `ConnectionProvider` for driving the router without Postgres.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diagnosis_core::Patient;
use diagnosis_server::db::{ConnectionProvider, PatientRepository};
use diagnosis_server::error::AppError;

#[derive(Default)]
struct Shared {
    rows: Mutex<BTreeMap<String, String>>,
    unavailable: AtomicBool,
    fail_statements: AtomicBool,
    acquired: AtomicUsize,
    live: AtomicUsize,
}

/// Table kept in a `BTreeMap`, with switches for failure injection and
/// counters for connection bookkeeping.
#[derive(Clone, Default)]
pub struct MemoryProvider {
    shared: Arc<Shared>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.shared.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_fail_statements(&self, fail: bool) {
        self.shared.fail_statements.store(fail, Ordering::SeqCst);
    }

    /// Connections handed out so far.
    pub fn acquired(&self) -> usize {
        self.shared.acquired.load(Ordering::SeqCst)
    }

    /// Connections handed out and not yet dropped.
    pub fn live(&self) -> usize {
        self.shared.live.load(Ordering::SeqCst)
    }

    pub fn row(&self, id: &str) -> Option<String> {
        self.shared.rows.lock().unwrap().get(id).cloned()
    }

    pub fn row_count(&self) -> usize {
        self.shared.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ConnectionProvider for MemoryProvider {
    async fn acquire(&self) -> Result<Box<dyn PatientRepository>, AppError> {
        if self.shared.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::ServiceUnavailable("connection refused".into()));
        }
        self.shared.acquired.fetch_add(1, Ordering::SeqCst);
        self.shared.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryConnection {
            shared: self.shared.clone(),
        }))
    }
}

struct MemoryConnection {
    shared: Arc<Shared>,
}

impl MemoryConnection {
    fn check(&self) -> Result<(), AppError> {
        if self.shared.fail_statements.load(Ordering::SeqCst) {
            return Err(AppError::Internal("injected statement failure".into()));
        }
        Ok(())
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.shared.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PatientRepository for MemoryConnection {
    async fn insert(&mut self, patient: &Patient) -> Result<(), AppError> {
        self.check()?;
        let mut rows = self.shared.rows.lock().unwrap();
        if rows.contains_key(&patient.id) {
            return Err(AppError::Internal(format!(
                "duplicate key value violates unique constraint: {}",
                patient.id
            )));
        }
        rows.insert(patient.id.clone(), patient.diagnosis.clone());
        Ok(())
    }

    async fn find(&mut self, id: &str) -> Result<Option<Patient>, AppError> {
        self.check()?;
        let rows = self.shared.rows.lock().unwrap();
        Ok(rows.get(id).map(|diagnosis| Patient::new(id, diagnosis.clone())))
    }

    async fn update_diagnosis(&mut self, id: &str, diagnosis: &str) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.shared.rows.lock().unwrap();
        match rows.get_mut(id) {
            Some(stored) => {
                *stored = diagnosis.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&mut self, id: &str) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.shared.rows.lock().unwrap();
        Ok(rows.remove(id).map_or(0, |_| 1))
    }

    async fn ping(&mut self) -> Result<(), AppError> {
        self.check()
    }
}
