//! Core data models for the Søgnehelligdag accrual engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod employee;
mod ledger;

pub use absence::{AbsenceReason, AbsenceRecord, AbsenceType, NewAbsence};
pub use employee::Employee;
pub use ledger::{AccrualEntry, AccrualLedger, EntryPatch, LedgerMutation, NewEntry};
