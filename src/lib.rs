//! Søgnehelligdag Compensation Accrual Engine
//!
//! This crate implements the Danish public holiday (Søgnehelligdag) compensation
//! rules for hourly employees: the holiday calendar, the 14.7%-of-daily-wage
//! accrual formula, per-employee/per-year accrual ledgers, and the idempotent
//! auto-population job that seeds holiday absences for all employees.

#![warn(missing_docs)]

pub mod bridge;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod population;
pub mod storage;
pub mod store;
