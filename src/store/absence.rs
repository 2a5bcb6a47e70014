//! Absence creation service.
//!
//! This module provides the [`AbsenceService`], the single creation path
//! all absences flow through. Registering a Søgnehelligdag absence invokes
//! the accrual bridge, so holiday absences and ledger entries stay coupled.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::bridge::{AccrualBridge, BridgeOutcome};
use crate::error::EngineResult;
use crate::models::{AbsenceReason, AbsenceRecord, Employee, NewAbsence};
use crate::storage::AbsenceRepository;

/// The result of creating an absence.
#[derive(Debug, Clone)]
pub struct AbsenceCreated {
    /// The persisted absence record.
    pub record: AbsenceRecord,
    /// The accrual bridge outcome, present for holiday absences only.
    ///
    /// Callers surface [`BridgeOutcome::RateMissing`] to the user as an
    /// advisory notice; the absence itself is recorded either way.
    pub accrual: Option<BridgeOutcome>,
}

/// Service for creating and querying absence records.
#[derive(Clone)]
pub struct AbsenceService {
    repo: Arc<dyn AbsenceRepository>,
    bridge: AccrualBridge,
}

impl AbsenceService {
    /// Creates a new absence service over the given repository and bridge.
    pub fn new(repo: Arc<dyn AbsenceRepository>, bridge: AccrualBridge) -> Self {
        Self { repo, bridge }
    }

    /// Validates, persists and (for holiday absences) bridges an absence.
    ///
    /// # Arguments
    ///
    /// * `absence` - The absence fields to record
    /// * `employee` - The employee the absence belongs to
    ///
    /// # Returns
    ///
    /// The persisted record plus the bridge outcome when the reason is
    /// Søgnehelligdag. Fails with `InvalidRecord` on bad fields and
    /// `DuplicateAbsence` when a record already exists for the employee,
    /// date and reason.
    pub async fn create(
        &self,
        absence: NewAbsence,
        employee: &Employee,
    ) -> EngineResult<AbsenceCreated> {
        let record = AbsenceRecord::new(&employee.id, &employee.name, absence, Utc::now())?;
        let record = self.repo.insert(record).await?;

        info!(
            employee_id = %employee.id,
            date = %record.date,
            reason = ?record.reason,
            "created absence record"
        );

        let accrual = if record.is_public_holiday() {
            Some(self.bridge.on_holiday_absence(&record, employee).await?)
        } else {
            None
        };

        Ok(AbsenceCreated { record, accrual })
    }

    /// Returns true if an absence exists for the employee, date and reason.
    pub async fn exists(
        &self,
        employee_id: &str,
        date: NaiveDate,
        reason: AbsenceReason,
    ) -> EngineResult<bool> {
        self.repo.exists(employee_id, date, reason).await
    }

    /// Counts Søgnehelligdag absences dated in the given year, across all
    /// employees.
    pub async fn count_public_holidays_in_year(&self, year: i32) -> EngineResult<usize> {
        self.repo
            .count_by_reason_in_year(AbsenceReason::PublicHoliday, year)
            .await
    }

    /// Lists all absences for an employee, sorted by date.
    pub async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<AbsenceRecord>> {
        self.repo.list_for_employee(employee_id).await
    }
}
