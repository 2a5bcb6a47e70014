//! In-memory storage backend.
//!
//! Provides an in-memory implementation of both repository ports. Useful
//! for testing and development; data is not persisted across restarts.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};

use super::{AbsenceRepository, LedgerRepository};
use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceReason, AbsenceRecord, AccrualLedger, LedgerMutation};

/// In-memory store implementing both repository ports.
///
/// Thread-safe through `RwLock`; ledger mutations run under the write
/// guard, which makes the duplicate-date check atomic.
///
/// # Example
///
/// ```
/// use sh_engine::storage::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ledgers: RwLock<HashMap<String, AccrualLedger>>,
    absences: RwLock<HashMap<(String, NaiveDate, AbsenceReason), AbsenceRecord>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all data from the store.
    pub fn clear(&self) {
        if let Ok(mut ledgers) = self.ledgers.write() {
            ledgers.clear();
        }
        if let Ok(mut absences) = self.absences.write() {
            absences.clear();
        }
    }

    /// Builds the composite document key for a ledger.
    fn ledger_key(employee_id: &str, year: i32) -> String {
        format!("{}_{}", employee_id, year)
    }

    fn lock_error<T>(e: T) -> EngineError
    where
        T: std::fmt::Display,
    {
        EngineError::Storage {
            message: format!("lock error: {}", e),
        }
    }
}

#[async_trait]
impl LedgerRepository for InMemoryStore {
    async fn fetch(&self, employee_id: &str, year: i32) -> EngineResult<Option<AccrualLedger>> {
        Ok(self
            .ledgers
            .read()
            .map_err(Self::lock_error)?
            .get(&Self::ledger_key(employee_id, year))
            .cloned())
    }

    async fn store(&self, ledger: &AccrualLedger) -> EngineResult<()> {
        self.ledgers
            .write()
            .map_err(Self::lock_error)?
            .insert(
                Self::ledger_key(&ledger.employee_id, ledger.year),
                ledger.clone(),
            );
        Ok(())
    }

    async fn apply(
        &self,
        employee_id: &str,
        employee_name: &str,
        year: i32,
        mutation: LedgerMutation,
    ) -> EngineResult<AccrualLedger> {
        let mut ledgers = self.ledgers.write().map_err(Self::lock_error)?;
        let key = Self::ledger_key(employee_id, year);
        let now = Utc::now();

        // Mutate a working copy; a failed mutation must not materialize a
        // vivified ledger or leave a half-applied one behind.
        let mut working = ledgers
            .get(&key)
            .cloned()
            .unwrap_or_else(|| AccrualLedger::empty(employee_id, employee_name, year, now));
        working.apply(mutation, now)?;
        ledgers.insert(key, working.clone());
        Ok(working)
    }
}

#[async_trait]
impl AbsenceRepository for InMemoryStore {
    async fn insert(&self, record: AbsenceRecord) -> EngineResult<AbsenceRecord> {
        let mut absences = self.absences.write().map_err(Self::lock_error)?;
        let key = (record.employee_id.clone(), record.date, record.reason);

        if absences.contains_key(&key) {
            return Err(EngineError::DuplicateAbsence {
                employee_id: record.employee_id,
                date: record.date,
            });
        }

        absences.insert(key, record.clone());
        Ok(record)
    }

    async fn exists(
        &self,
        employee_id: &str,
        date: NaiveDate,
        reason: AbsenceReason,
    ) -> EngineResult<bool> {
        Ok(self
            .absences
            .read()
            .map_err(Self::lock_error)?
            .contains_key(&(employee_id.to_string(), date, reason)))
    }

    async fn count_by_reason_in_year(
        &self,
        reason: AbsenceReason,
        year: i32,
    ) -> EngineResult<usize> {
        Ok(self
            .absences
            .read()
            .map_err(Self::lock_error)?
            .values()
            .filter(|r| r.reason == reason && r.date.year() == year)
            .count())
    }

    async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<AbsenceRecord>> {
        let mut records: Vec<_> = self
            .absences
            .read()
            .map_err(Self::lock_error)?
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}
