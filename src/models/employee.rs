//! Employee model.
//!
//! This module defines the Employee struct consumed by the accrual bridge
//! and the auto-population job.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee subject to Søgnehelligdag accrual.
///
/// The engine only needs the identity fields and the internal hourly rate;
/// the full personnel record lives with the employee directory collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The internal hourly rate in kroner, if one has been configured.
    ///
    /// Accrual cannot be computed without a positive rate; absences are
    /// still recorded in that case, but no ledger entry is created.
    pub internal_hourly_rate: Option<Decimal>,
}

impl Employee {
    /// Returns the hourly rate if it is positive, `None` otherwise.
    ///
    /// A zero or negative configured rate is treated the same as a missing
    /// one: the accrual is not computable.
    ///
    /// # Examples
    ///
    /// ```
    /// use sh_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Mette Hansen".to_string(),
    ///     internal_hourly_rate: Some(Decimal::from(250)),
    /// };
    /// assert_eq!(employee.usable_hourly_rate(), Some(Decimal::from(250)));
    /// ```
    pub fn usable_hourly_rate(&self) -> Option<Decimal> {
        self.internal_hourly_rate.filter(|rate| *rate > Decimal::ZERO)
    }
}
