//! Accrual ledger service.
//!
//! This module provides the [`LedgerStore`] service implementing the ledger
//! contract over an injected [`LedgerRepository`]: lazy creation, entry
//! add/update/delete with derived totals, the paid-out flag, and the
//! existence check the accrual bridge runs before inserting.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::models::{AccrualEntry, AccrualLedger, EntryPatch, LedgerMutation, NewEntry};
use crate::storage::LedgerRepository;

/// Service for per-employee, per-year accrual ledgers.
///
/// All invariant enforcement lives in [`AccrualLedger::apply`]; this service
/// routes operations through the repository's atomic `apply` so duplicate
/// dates are deterministic conflicts. Reads are total-defined: a ledger that
/// has never been materialized behaves as an empty ledger.
#[derive(Clone)]
pub struct LedgerStore {
    repo: Arc<dyn LedgerRepository>,
}

impl LedgerStore {
    /// Creates a new ledger service over the given repository.
    pub fn new(repo: Arc<dyn LedgerRepository>) -> Self {
        Self { repo }
    }

    /// Returns the ledger for the employee and year, creating an empty one
    /// if none exists yet. Idempotent.
    pub async fn get_or_create(
        &self,
        employee_id: &str,
        employee_name: &str,
        year: i32,
    ) -> EngineResult<AccrualLedger> {
        if let Some(ledger) = self.repo.fetch(employee_id, year).await? {
            return Ok(ledger);
        }

        let ledger = AccrualLedger::empty(employee_id, employee_name, year, Utc::now());
        self.repo.store(&ledger).await?;
        info!(employee_id, year, "created empty accrual ledger");
        Ok(ledger)
    }

    /// Adds an entry to the ledger, auto-vivifying the ledger if needed.
    ///
    /// # Returns
    ///
    /// The persisted entry, or `DuplicateEntry` if the ledger already has
    /// an entry for the date. The duplicate check runs atomically inside
    /// the repository, so concurrent inserts for the same date cannot both
    /// succeed.
    pub async fn add_entry(
        &self,
        employee_id: &str,
        employee_name: &str,
        year: i32,
        entry: NewEntry,
    ) -> EngineResult<AccrualEntry> {
        let date = entry.date;
        let ledger = self
            .repo
            .apply(
                employee_id,
                employee_name,
                year,
                LedgerMutation::AddEntry {
                    entry: entry.into_entry(Utc::now()),
                },
            )
            .await?;

        info!(
            employee_id,
            year,
            date = %date,
            total = %ledger.accumulated_amount,
            "added accrual entry"
        );

        // The entry was just inserted under the write guard, so it is
        // present in the returned ledger.
        ledger
            .entry_for(date)
            .cloned()
            .ok_or_else(|| crate::error::EngineError::Storage {
                message: format!("entry for {} missing after insert", date),
            })
    }

    /// Merges a patch into the entry for a date, recomputing the total.
    pub async fn update_entry(
        &self,
        employee_id: &str,
        year: i32,
        date: NaiveDate,
        patch: EntryPatch,
    ) -> EngineResult<()> {
        let ledger = self
            .repo
            .apply(
                employee_id,
                "",
                year,
                LedgerMutation::UpdateEntry { date, patch },
            )
            .await?;

        debug!(
            employee_id,
            year,
            date = %date,
            total = %ledger.accumulated_amount,
            "updated accrual entry"
        );
        Ok(())
    }

    /// Deletes the entry for a date, recomputing the total.
    pub async fn delete_entry(
        &self,
        employee_id: &str,
        year: i32,
        date: NaiveDate,
    ) -> EngineResult<()> {
        let ledger = self
            .repo
            .apply(employee_id, "", year, LedgerMutation::DeleteEntry { date })
            .await?;

        debug!(
            employee_id,
            year,
            date = %date,
            total = %ledger.accumulated_amount,
            "deleted accrual entry"
        );
        Ok(())
    }

    /// Marks the ledger as paid out, recording the payout timestamp.
    ///
    /// The flag is bookkeeping only: it does not lock the ledger against
    /// further entry mutation, so post-payout corrections stay possible.
    pub async fn mark_paid_out(&self, employee_id: &str, year: i32) -> EngineResult<()> {
        self.set_paid_out(employee_id, year, true).await
    }

    /// Clears the paid-out flag and payout timestamp.
    pub async fn unmark_paid_out(&self, employee_id: &str, year: i32) -> EngineResult<()> {
        self.set_paid_out(employee_id, year, false).await
    }

    async fn set_paid_out(&self, employee_id: &str, year: i32, paid: bool) -> EngineResult<()> {
        self.repo
            .apply(
                employee_id,
                "",
                year,
                LedgerMutation::SetPaidOut {
                    paid,
                    at: Utc::now(),
                },
            )
            .await?;
        info!(employee_id, year, paid, "set ledger paid-out flag");
        Ok(())
    }

    /// Returns true if the ledger has an entry for the date.
    ///
    /// A ledger that has never been materialized reads as empty.
    pub async fn entry_exists(
        &self,
        employee_id: &str,
        year: i32,
        date: NaiveDate,
    ) -> EngineResult<bool> {
        Ok(self
            .repo
            .fetch(employee_id, year)
            .await?
            .is_some_and(|ledger| ledger.has_entry_for(date)))
    }
}
