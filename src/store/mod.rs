//! Store-facing services for the accrual engine.
//!
//! These services wrap the persistence ports with the engine's business
//! rules: ledger bookkeeping with duplicate-date rejection and derived
//! totals, and the absence creation path that feeds the accrual bridge.

mod absence;
mod ledger;

pub use absence::{AbsenceCreated, AbsenceService};
pub use ledger::LedgerStore;
