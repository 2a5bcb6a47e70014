//! Idempotent holiday auto-population job.
//!
//! On application load, this job makes sure every employee has a
//! Søgnehelligdag absence (and, transitively, a ledger entry) for every
//! public holiday of the current and next calendar year. It is designed to
//! run far more often than it writes: a single count query per year decides
//! whether anything needs to be done at all.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use crate::calculation::{HOLIDAYS_PER_YEAR, HolidayOccurrence, holidays_for_year};
use crate::config::PopulationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceReason, Employee, NewAbsence};
use crate::store::AbsenceService;

/// How a year fared in a population run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearStatus {
    /// The count check found the year sufficiently populated; no writes.
    AlreadyPopulated,
    /// The year was walked employee-by-employee and missing entries created.
    Populated,
}

/// The per-year outcome of a population run.
#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    /// The calendar year.
    pub year: i32,
    /// Whether the year needed populating.
    pub status: YearStatus,
    /// Absences created in this run.
    pub created: usize,
    /// Employee/holiday pairs skipped because they already existed.
    pub skipped: usize,
    /// Per-entry failures; these never abort the batch.
    pub errors: Vec<String>,
}

/// The overall outcome of a population run.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport {
    /// One report per covered year, in ascending year order.
    pub years: Vec<YearReport>,
}

impl PopulationReport {
    /// Total absences created across all covered years.
    pub fn total_created(&self) -> usize {
        self.years.iter().map(|y| y.created).sum()
    }

    /// Total per-entry failures across all covered years.
    pub fn total_errors(&self) -> usize {
        self.years.iter().map(|y| y.errors.len()).sum()
    }
}

/// Seeds holiday absences for all employees for the current and next year.
///
/// Population flows through the normal absence-creation path, so the
/// accrual bridge runs for every created absence and ledger entries follow
/// transitively. Each `(employee, date)` pair is independently idempotent:
/// existing absences are skipped, and a lost check-then-create race
/// resolves to a deterministic duplicate conflict that is also counted as
/// a skip.
pub struct AutoPopulator {
    absences: AbsenceService,
    config: PopulationConfig,
}

impl AutoPopulator {
    /// Creates a new populator using the given absence service and config.
    pub fn new(absences: AbsenceService, config: PopulationConfig) -> Self {
        Self { absences, config }
    }

    /// Runs the population job for `today`'s year and the following year.
    ///
    /// # Arguments
    ///
    /// * `employees` - The full employee list from the directory
    /// * `today` - The date the run is anchored to
    ///
    /// # Returns
    ///
    /// A report with per-year created/skipped counts and collected
    /// per-entry errors. Only a failing population check itself (the count
    /// query) fails the whole run.
    pub async fn run(
        &self,
        employees: &[Employee],
        today: NaiveDate,
    ) -> EngineResult<PopulationReport> {
        let current_year = today.year();
        let mut years = Vec::with_capacity(2);

        for year in [current_year, current_year + 1] {
            years.push(self.populate_year(employees, year).await?);
        }

        Ok(PopulationReport { years })
    }

    async fn populate_year(&self, employees: &[Employee], year: i32) -> EngineResult<YearReport> {
        let count = self.absences.count_public_holidays_in_year(year).await?;
        let expected = employees.len() * HOLIDAYS_PER_YEAR;

        if is_populated(count, expected, self.config.populated_threshold_percent) {
            info!(year, count, expected, "holiday absences already populated");
            return Ok(YearReport {
                year,
                status: YearStatus::AlreadyPopulated,
                created: 0,
                skipped: 0,
                errors: Vec::new(),
            });
        }

        info!(
            year,
            count, expected, "populating holiday absences for all employees"
        );

        let holidays = holidays_for_year(year);
        let mut created = 0;
        let mut skipped = 0;
        let mut errors = Vec::new();

        for employee in employees {
            for holiday in &holidays {
                match self.ensure_absence(employee, holiday).await {
                    Ok(true) => {
                        created += 1;
                        // Throttle writes to the backing store; skips are
                        // read-only and need no pacing.
                        if self.config.write_delay_ms > 0 {
                            sleep(Duration::from_millis(self.config.write_delay_ms)).await;
                        }
                    }
                    Ok(false) => skipped += 1,
                    Err(err) => {
                        warn!(
                            employee_id = %employee.id,
                            date = %holiday.date,
                            error = %err,
                            "failed to populate holiday absence"
                        );
                        errors.push(format!(
                            "{} ({}): {}: {}",
                            employee.name, employee.id, holiday.date, err
                        ));
                    }
                }
            }
        }

        info!(year, created, skipped, errors = errors.len(), "population finished");

        Ok(YearReport {
            year,
            status: YearStatus::Populated,
            created,
            skipped,
            errors,
        })
    }

    /// Creates the absence for one employee/holiday pair unless it exists.
    ///
    /// Returns true if an absence was created, false if it was skipped.
    async fn ensure_absence(
        &self,
        employee: &Employee,
        holiday: &HolidayOccurrence,
    ) -> EngineResult<bool> {
        if self
            .absences
            .exists(&employee.id, holiday.date, AbsenceReason::PublicHoliday)
            .await?
        {
            return Ok(false);
        }

        let absence = NewAbsence {
            comment: Some(holiday.name.clone()),
            ..NewAbsence::single_day(holiday.date, AbsenceReason::PublicHoliday)
        };

        match self.absences.create(absence, employee).await {
            Ok(_) => Ok(true),
            // Another writer beat us between the check and the create
            Err(EngineError::DuplicateAbsence { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// Decides whether a year counts as populated.
///
/// A year is populated when the existing count reaches 90% (by default) of
/// `employees × 10` holidays. The slack deliberately tolerates a few
/// manually deleted entries, so an administrator's intentional removals do
/// not get resurrected on the next application load. The boundary is
/// inclusive and computed in integer arithmetic: exactly 90% counts as
/// populated.
fn is_populated(count: usize, expected: usize, threshold_percent: u32) -> bool {
    count * 100 >= expected * threshold_percent as usize
}
