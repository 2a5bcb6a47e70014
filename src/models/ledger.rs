//! Accrual ledger model and mutation logic.
//!
//! This module defines the per-employee, per-year Søgnehelligdag accrual
//! ledger. All mutation logic lives on the model itself so every storage
//! backend enforces the same invariants:
//!
//! - at most one entry per date per ledger
//! - `accumulated_amount` always equals the rounded sum of entry amounts

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{accrual_rate, daily_hours, round2};
use crate::error::{EngineError, EngineResult};

/// One accrued holiday-pay entry, embedded in a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualEntry {
    /// The holiday date; unique within a ledger.
    pub date: NaiveDate,
    /// The name of the holiday (or an ad hoc label supplied by the caller).
    pub holiday_name: String,
    /// The hourly rate in effect at calculation time, snapshotted.
    pub hourly_rate: Decimal,
    /// The nominal day length the amount was computed from (7 or 7.5).
    pub daily_hours: Decimal,
    /// The accrued amount, rounded to 2 decimal places.
    pub amount: Decimal,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

/// The fields needed to create a new accrual entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// The holiday date.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub holiday_name: String,
    /// The hourly rate to snapshot.
    pub hourly_rate: Decimal,
    /// The nominal day length.
    pub daily_hours: Decimal,
    /// The accrued amount.
    pub amount: Decimal,
}

impl NewEntry {
    /// Builds an entry from a rate and the weekday the holiday falls on,
    /// computing the hours and amount with the standard formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use sh_engine::models::NewEntry;
    /// use chrono::{NaiveDate, Weekday};
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(); // a Friday
    /// let entry = NewEntry::from_rate(date, "Langfredag", Decimal::from(250), Weekday::Fri);
    /// assert_eq!(entry.daily_hours, Decimal::new(70, 1));
    /// assert_eq!(entry.amount, Decimal::new(25725, 2)); // 250 × 7 × 0.147
    /// ```
    pub fn from_rate(
        date: NaiveDate,
        holiday_name: &str,
        hourly_rate: Decimal,
        weekday: Weekday,
    ) -> Self {
        let hours = daily_hours(weekday);
        Self {
            date,
            holiday_name: holiday_name.to_string(),
            hourly_rate,
            daily_hours: hours,
            amount: round2(hourly_rate * hours * accrual_rate()),
        }
    }

    /// Converts into a timestamped ledger entry.
    pub fn into_entry(self, now: DateTime<Utc>) -> AccrualEntry {
        AccrualEntry {
            date: self.date,
            holiday_name: self.holiday_name,
            hourly_rate: self.hourly_rate,
            daily_hours: self.daily_hours,
            amount: self.amount,
            created_at: now,
        }
    }
}

/// A partial update to an existing accrual entry.
///
/// When `amount` is set it overrides the entry's amount directly; otherwise
/// a changed rate or hours triggers a recomputation with the standard
/// formula.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    /// New holiday name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// New hourly rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// New nominal day length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_hours: Option<Decimal>,
    /// Direct amount override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// A mutation to apply to a ledger.
///
/// Mutations are applied through [`AccrualLedger::apply`], which enforces
/// the ledger invariants and recomputes the accumulated total. Storage
/// backends run mutations under their write guard, so a duplicate-date
/// insert is a deterministic conflict rather than a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum LedgerMutation {
    /// Append a new entry; fails if the date is already present.
    AddEntry {
        /// The entry to append.
        entry: AccrualEntry,
    },
    /// Merge a patch into the entry for a date; fails if absent.
    UpdateEntry {
        /// The date identifying the entry.
        date: NaiveDate,
        /// The fields to change.
        patch: EntryPatch,
    },
    /// Remove the entry for a date; fails if absent.
    DeleteEntry {
        /// The date identifying the entry.
        date: NaiveDate,
    },
    /// Set or clear the paid-out flag.
    SetPaidOut {
        /// Whether the ledger has been paid out.
        paid: bool,
        /// The payout timestamp recorded when `paid` is true.
        at: DateTime<Utc>,
    },
}

/// The per-employee, per-year accrual ledger.
///
/// Keyed by `(employee_id, year)`. The `accumulated_amount` is a derived
/// value recomputed from scratch on every entry mutation; it is never set
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualLedger {
    /// The employee the ledger belongs to.
    pub employee_id: String,
    /// The employee's display name, denormalized for reports.
    pub employee_name: String,
    /// The calendar year the ledger covers.
    pub year: i32,
    /// The accrued entries, in insertion order.
    pub entries: Vec<AccrualEntry>,
    /// The rounded sum of all entry amounts.
    pub accumulated_amount: Decimal,
    /// Whether the ledger has been paid out.
    pub is_paid_out: bool,
    /// When the ledger was paid out, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_out_date: Option<DateTime<Utc>>,
    /// When the ledger was created.
    pub created_at: DateTime<Utc>,
    /// When the ledger was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AccrualLedger {
    /// Creates an empty ledger with a zero total.
    pub fn empty(employee_id: &str, employee_name: &str, year: i32, now: DateTime<Utc>) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            year,
            entries: Vec::new(),
            accumulated_amount: Decimal::ZERO,
            is_paid_out: false,
            paid_out_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the entry for a date, if one exists.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&AccrualEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Returns true if an entry exists for the date.
    pub fn has_entry_for(&self, date: NaiveDate) -> bool {
        self.entry_for(date).is_some()
    }

    /// Returns the entries sorted by date, for display.
    pub fn sorted_entries(&self) -> Vec<&AccrualEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|e| e.date);
        entries
    }

    /// Applies a mutation, recomputing the accumulated total.
    ///
    /// The paid-out flag does not lock the ledger: entry mutations remain
    /// legal after payout so post-payout corrections can be recorded. The
    /// presentation layer is expected to disable edit controls instead.
    ///
    /// # Arguments
    ///
    /// * `mutation` - The mutation to apply
    /// * `now` - The timestamp recorded as `updated_at` on success
    ///
    /// # Returns
    ///
    /// `DuplicateEntry` when adding an entry for a date that is already
    /// present, `EntryNotFound` when updating or deleting an absent date.
    ///
    /// # Examples
    ///
    /// ```
    /// use sh_engine::models::{AccrualLedger, LedgerMutation, NewEntry};
    /// use chrono::{NaiveDate, Utc, Weekday};
    /// use rust_decimal::Decimal;
    ///
    /// let now = Utc::now();
    /// let mut ledger = AccrualLedger::empty("emp_001", "Mette Hansen", 2025, now);
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
    /// let entry = NewEntry::from_rate(date, "Langfredag", Decimal::from(250), Weekday::Fri)
    ///     .into_entry(now);
    /// ledger.apply(LedgerMutation::AddEntry { entry }, now).unwrap();
    ///
    /// assert_eq!(ledger.accumulated_amount, Decimal::new(25725, 2));
    /// ```
    pub fn apply(&mut self, mutation: LedgerMutation, now: DateTime<Utc>) -> EngineResult<()> {
        match mutation {
            LedgerMutation::AddEntry { entry } => {
                if self.has_entry_for(entry.date) {
                    return Err(EngineError::DuplicateEntry {
                        employee_id: self.employee_id.clone(),
                        year: self.year,
                        date: entry.date,
                    });
                }
                self.entries.push(entry);
                self.recompute_total();
            }
            LedgerMutation::UpdateEntry { date, patch } => {
                let Some(entry) = self.entries.iter_mut().find(|e| e.date == date) else {
                    return Err(EngineError::EntryNotFound {
                        employee_id: self.employee_id.clone(),
                        year: self.year,
                        date,
                    });
                };

                if let Some(name) = patch.holiday_name {
                    entry.holiday_name = name;
                }
                let rate_or_hours_changed =
                    patch.hourly_rate.is_some() || patch.daily_hours.is_some();
                if let Some(rate) = patch.hourly_rate {
                    entry.hourly_rate = rate;
                }
                if let Some(hours) = patch.daily_hours {
                    entry.daily_hours = hours;
                }
                if let Some(amount) = patch.amount {
                    entry.amount = amount;
                } else if rate_or_hours_changed {
                    entry.amount = round2(entry.hourly_rate * entry.daily_hours * accrual_rate());
                }
                self.recompute_total();
            }
            LedgerMutation::DeleteEntry { date } => {
                let before = self.entries.len();
                self.entries.retain(|e| e.date != date);
                if self.entries.len() == before {
                    return Err(EngineError::EntryNotFound {
                        employee_id: self.employee_id.clone(),
                        year: self.year,
                        date,
                    });
                }
                self.recompute_total();
            }
            LedgerMutation::SetPaidOut { paid, at } => {
                self.is_paid_out = paid;
                self.paid_out_date = paid.then_some(at);
            }
        }

        self.updated_at = now;
        Ok(())
    }

    /// Recomputes `accumulated_amount` from scratch.
    fn recompute_total(&mut self) {
        let sum: Decimal = self.entries.iter().map(|e| e.amount).sum();
        self.accumulated_amount = round2(sum);
    }
}
