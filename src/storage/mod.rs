//! Persistence ports for the accrual engine.
//!
//! These traits define the interfaces the engine needs from a backing
//! document store: point lookup of ledgers by composite key, atomic ledger
//! mutation, deduplicated absence insertion, and the filtered counts the
//! auto-population check runs. Implementations are injected into the
//! services, so tests substitute the bundled [`InMemoryStore`].

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AbsenceReason, AbsenceRecord, AccrualLedger, LedgerMutation};

/// Storage port for accrual ledgers.
///
/// A ledger is addressed by the composite key `(employee_id, year)`.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Fetches a ledger, or `None` if it has never been materialized.
    async fn fetch(&self, employee_id: &str, year: i32) -> EngineResult<Option<AccrualLedger>>;

    /// Upserts a ledger document.
    async fn store(&self, ledger: &AccrualLedger) -> EngineResult<()>;

    /// Applies a mutation to a ledger atomically, auto-vivifying an empty
    /// ledger when none exists yet.
    ///
    /// The backend runs the mutation under its write guard, so two
    /// concurrent inserts for the same date resolve to one success and one
    /// `DuplicateEntry` conflict instead of a silent duplicate. A failed
    /// mutation leaves the stored ledger untouched.
    ///
    /// # Returns
    ///
    /// The ledger as persisted after the mutation.
    async fn apply(
        &self,
        employee_id: &str,
        employee_name: &str,
        year: i32,
        mutation: LedgerMutation,
    ) -> EngineResult<AccrualLedger>;
}

/// Storage port for absence records.
#[async_trait]
pub trait AbsenceRepository: Send + Sync {
    /// Inserts a record, rejecting a duplicate `(employee, date, reason)`
    /// atomically with `DuplicateAbsence`.
    async fn insert(&self, record: AbsenceRecord) -> EngineResult<AbsenceRecord>;

    /// Returns true if a record exists for the employee, date and reason.
    async fn exists(
        &self,
        employee_id: &str,
        date: NaiveDate,
        reason: AbsenceReason,
    ) -> EngineResult<bool>;

    /// Counts records with the given reason dated in the given year,
    /// across all employees. This is the auto-population check's single
    /// query.
    async fn count_by_reason_in_year(
        &self,
        reason: AbsenceReason,
        year: i32,
    ) -> EngineResult<usize>;

    /// Lists all records for an employee, sorted by date.
    async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<AbsenceRecord>>;
}
