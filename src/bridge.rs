//! Absence-to-accrual bridge.
//!
//! When an absence is registered as a Søgnehelligdag, this bridge derives
//! the matching ledger entry (holiday name, snapshotted rate, nominal hours,
//! amount) and inserts it into the employee's ledger for the year, skipping
//! idempotently when an entry already exists for the date.

use chrono::Datelike;
use tracing::{debug, info, warn};

use crate::calculation::{Compensation, compensation, holiday_name_for_date};
use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceRecord, AccrualEntry, Employee, NewEntry};
use crate::store::LedgerStore;

/// The label recorded when a holiday absence does not match a calendar
/// holiday, e.g. an ad hoc closure day declared by an administrator.
pub const GENERIC_HOLIDAY_LABEL: &str = "Søgnehelligdag";

/// The outcome of bridging one holiday absence into the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeOutcome {
    /// A new ledger entry was created.
    Recorded(AccrualEntry),
    /// An entry already existed for the date; nothing was inserted.
    AlreadyRecorded,
    /// The employee has no positive hourly rate, so the accrual could not
    /// be computed. Advisory: the absence itself stays recorded, and the
    /// caller is expected to surface an informational notice.
    RateMissing,
}

/// Bridges holiday absences into accrual ledger entries.
#[derive(Clone)]
pub struct AccrualBridge {
    ledgers: LedgerStore,
}

impl AccrualBridge {
    /// Creates a new bridge writing through the given ledger service.
    pub fn new(ledgers: LedgerStore) -> Self {
        Self { ledgers }
    }

    /// Reacts to a newly created Søgnehelligdag absence.
    ///
    /// The date is not validated against the holiday calendar: an
    /// administrator may register any date as a holiday absence for ad hoc
    /// closures. The calendar is only consulted to resolve the holiday
    /// name, falling back to [`GENERIC_HOLIDAY_LABEL`].
    ///
    /// A `DuplicateEntry` conflict from the store (another writer won the
    /// race after the existence pre-check) is mapped to
    /// [`BridgeOutcome::AlreadyRecorded`], keeping the operation idempotent.
    pub async fn on_holiday_absence(
        &self,
        absence: &AbsenceRecord,
        employee: &Employee,
    ) -> EngineResult<BridgeOutcome> {
        let Some(rate) = employee.usable_hourly_rate() else {
            warn!(
                employee_id = %employee.id,
                date = %absence.date,
                "no usable hourly rate; holiday accrual not computable"
            );
            return Ok(BridgeOutcome::RateMissing);
        };

        let year = absence.date.year();
        if self
            .ledgers
            .entry_exists(&absence.employee_id, year, absence.date)
            .await?
        {
            debug!(
                employee_id = %employee.id,
                date = %absence.date,
                "accrual entry already present; skipping"
            );
            return Ok(BridgeOutcome::AlreadyRecorded);
        }

        let holiday_name = holiday_name_for_date(absence.date)
            .unwrap_or_else(|| GENERIC_HOLIDAY_LABEL.to_string());

        let entry = match compensation(Some(rate), absence.date.weekday()) {
            Compensation::Computed {
                daily_hours,
                amount,
            } => NewEntry {
                date: absence.date,
                holiday_name,
                hourly_rate: rate,
                daily_hours,
                amount,
            },
            Compensation::NotComputable => return Ok(BridgeOutcome::RateMissing),
        };

        match self
            .ledgers
            .add_entry(&absence.employee_id, &absence.employee_name, year, entry)
            .await
        {
            Ok(entry) => {
                info!(
                    employee_id = %employee.id,
                    date = %absence.date,
                    holiday = %entry.holiday_name,
                    amount = %entry.amount,
                    "recorded holiday accrual"
                );
                Ok(BridgeOutcome::Recorded(entry))
            }
            Err(EngineError::DuplicateEntry { .. }) => Ok(BridgeOutcome::AlreadyRecorded),
            Err(err) => Err(err),
        }
    }
}
