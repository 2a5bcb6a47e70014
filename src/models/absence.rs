//! Absence record model and related types.
//!
//! This module defines the AbsenceRecord struct together with the
//! AbsenceType and AbsenceReason enums. Absence records are owned by the
//! absence subsystem; the accrual engine consumes records whose reason is
//! [`AbsenceReason::PublicHoliday`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Represents the shape of an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    /// A single full day of absence.
    Single,
    /// A partial day; requires the number of hours worked.
    Partial,
    /// A date range; requires an end date on or after the start date.
    Extended,
}

/// The registered reason for an absence.
///
/// Serialized with the Danish labels used throughout the back office, so
/// documents written by the engine match what administrators see and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsenceReason {
    /// A Danish public holiday; the only reason the accrual bridge reacts to.
    #[serde(rename = "Søgnehelligdag")]
    PublicHoliday,
    /// Sick leave.
    #[serde(rename = "Sygdom")]
    Sickness,
    /// Vacation.
    #[serde(rename = "Ferie")]
    Vacation,
    /// Any other reason, described in the comment field.
    #[serde(rename = "Andet")]
    Other,
}

/// A persisted absence record.
///
/// One record exists per employee per date, except [`AbsenceType::Extended`]
/// records which span the range `date..=end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee the absence belongs to.
    pub employee_id: String,
    /// The employee's display name, denormalized for listing screens.
    pub employee_name: String,
    /// The (start) date of the absence.
    pub date: NaiveDate,
    /// The shape of the absence.
    pub absence_type: AbsenceType,
    /// The registered reason.
    pub reason: AbsenceReason,
    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Hours worked on a partial absence day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Decimal>,
    /// Inclusive end date of an extended absence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The fields needed to create a new absence record.
///
/// Identity fields come from the employee the caller passes alongside this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAbsence {
    /// The (start) date of the absence.
    pub date: NaiveDate,
    /// The shape of the absence.
    pub absence_type: AbsenceType,
    /// The registered reason.
    pub reason: AbsenceReason,
    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Hours worked on a partial absence day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Decimal>,
    /// Inclusive end date of an extended absence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl NewAbsence {
    /// Creates a single-day absence with no comment.
    pub fn single_day(date: NaiveDate, reason: AbsenceReason) -> Self {
        Self {
            date,
            absence_type: AbsenceType::Single,
            reason,
            comment: None,
            hours_worked: None,
            end_date: None,
        }
    }
}

impl AbsenceRecord {
    /// Validates the fields and constructs a new absence record.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee's unique identifier; must be non-empty
    /// * `employee_name` - The employee's display name; must be non-empty
    /// * `absence` - The absence fields to record
    /// * `now` - The creation timestamp
    ///
    /// # Returns
    ///
    /// Returns the record, or `InvalidRecord` if:
    /// - `employee_id` or `employee_name` is empty
    /// - the type is `Partial` and `hours_worked` is missing
    /// - the type is `Extended` and `end_date` is missing or before `date`
    ///
    /// # Examples
    ///
    /// ```
    /// use sh_engine::models::{AbsenceReason, AbsenceRecord, NewAbsence};
    /// use chrono::{NaiveDate, Utc};
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
    /// let record = AbsenceRecord::new(
    ///     "emp_001",
    ///     "Mette Hansen",
    ///     NewAbsence::single_day(date, AbsenceReason::PublicHoliday),
    ///     Utc::now(),
    /// )
    /// .unwrap();
    /// assert_eq!(record.reason, AbsenceReason::PublicHoliday);
    /// ```
    pub fn new(
        employee_id: &str,
        employee_name: &str,
        absence: NewAbsence,
        now: DateTime<Utc>,
    ) -> EngineResult<Self> {
        if employee_id.is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "employee_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if employee_name.is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "employee_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        match absence.absence_type {
            AbsenceType::Partial if absence.hours_worked.is_none() => {
                return Err(EngineError::InvalidRecord {
                    field: "hours_worked".to_string(),
                    message: "required for partial absences".to_string(),
                });
            }
            AbsenceType::Extended => match absence.end_date {
                None => {
                    return Err(EngineError::InvalidRecord {
                        field: "end_date".to_string(),
                        message: "required for extended absences".to_string(),
                    });
                }
                Some(end) if end < absence.date => {
                    return Err(EngineError::InvalidRecord {
                        field: "end_date".to_string(),
                        message: format!("{} is before the start date {}", end, absence.date),
                    });
                }
                Some(_) => {}
            },
            _ => {}
        }

        Ok(Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            date: absence.date,
            absence_type: absence.absence_type,
            reason: absence.reason,
            comment: absence.comment,
            hours_worked: absence.hours_worked,
            end_date: absence.end_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns true if the absence is registered as a public holiday.
    pub fn is_public_holiday(&self) -> bool {
        self.reason == AbsenceReason::PublicHoliday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn holiday_absence(d: NaiveDate) -> NewAbsence {
        NewAbsence::single_day(d, AbsenceReason::PublicHoliday)
    }

    #[test]
    fn test_create_single_day_record() {
        let record = AbsenceRecord::new(
            "emp_001",
            "Mette Hansen",
            holiday_absence(date(2025, 4, 18)),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.date, date(2025, 4, 18));
        assert_eq!(record.absence_type, AbsenceType::Single);
        assert!(record.is_public_holiday());
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_empty_employee_id_rejected() {
        let result = AbsenceRecord::new(
            "",
            "Mette Hansen",
            holiday_absence(date(2025, 4, 18)),
            Utc::now(),
        );

        match result.unwrap_err() {
            EngineError::InvalidRecord { field, .. } => assert_eq!(field, "employee_id"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_employee_name_rejected() {
        let result =
            AbsenceRecord::new("emp_001", "", holiday_absence(date(2025, 4, 18)), Utc::now());

        match result.unwrap_err() {
            EngineError::InvalidRecord { field, .. } => assert_eq!(field, "employee_name"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_requires_hours_worked() {
        let absence = NewAbsence {
            date: date(2025, 3, 10),
            absence_type: AbsenceType::Partial,
            reason: AbsenceReason::Sickness,
            comment: None,
            hours_worked: None,
            end_date: None,
        };

        let result = AbsenceRecord::new("emp_001", "Mette Hansen", absence, Utc::now());
        match result.unwrap_err() {
            EngineError::InvalidRecord { field, .. } => assert_eq!(field, "hours_worked"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_with_hours_accepted() {
        let absence = NewAbsence {
            date: date(2025, 3, 10),
            absence_type: AbsenceType::Partial,
            reason: AbsenceReason::Sickness,
            comment: None,
            hours_worked: Some(Decimal::new(35, 1)),
            end_date: None,
        };

        let record = AbsenceRecord::new("emp_001", "Mette Hansen", absence, Utc::now()).unwrap();
        assert_eq!(record.hours_worked, Some(Decimal::new(35, 1)));
    }

    #[test]
    fn test_extended_requires_end_date() {
        let absence = NewAbsence {
            date: date(2025, 7, 1),
            absence_type: AbsenceType::Extended,
            reason: AbsenceReason::Vacation,
            comment: None,
            hours_worked: None,
            end_date: None,
        };

        let result = AbsenceRecord::new("emp_001", "Mette Hansen", absence, Utc::now());
        match result.unwrap_err() {
            EngineError::InvalidRecord { field, .. } => assert_eq!(field, "end_date"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_extended_end_before_start_rejected() {
        let absence = NewAbsence {
            date: date(2025, 7, 14),
            absence_type: AbsenceType::Extended,
            reason: AbsenceReason::Vacation,
            comment: None,
            hours_worked: None,
            end_date: Some(date(2025, 7, 7)),
        };

        let result = AbsenceRecord::new("emp_001", "Mette Hansen", absence, Utc::now());
        match result.unwrap_err() {
            EngineError::InvalidRecord { field, message } => {
                assert_eq!(field, "end_date");
                assert!(message.contains("before the start date"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_extended_same_day_range_accepted() {
        let absence = NewAbsence {
            date: date(2025, 7, 14),
            absence_type: AbsenceType::Extended,
            reason: AbsenceReason::Vacation,
            comment: None,
            hours_worked: None,
            end_date: Some(date(2025, 7, 14)),
        };

        let record = AbsenceRecord::new("emp_001", "Mette Hansen", absence, Utc::now()).unwrap();
        assert_eq!(record.end_date, Some(date(2025, 7, 14)));
    }

    #[test]
    fn test_reason_serializes_with_danish_labels() {
        assert_eq!(
            serde_json::to_string(&AbsenceReason::PublicHoliday).unwrap(),
            "\"Søgnehelligdag\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceReason::Sickness).unwrap(),
            "\"Sygdom\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceReason::Vacation).unwrap(),
            "\"Ferie\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceReason::Other).unwrap(),
            "\"Andet\""
        );
    }

    #[test]
    fn test_absence_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AbsenceType::Single).unwrap(),
            "\"single\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceType::Partial).unwrap(),
            "\"partial\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceType::Extended).unwrap(),
            "\"extended\""
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = AbsenceRecord::new(
            "emp_001",
            "Mette Hansen",
            holiday_absence(date(2025, 12, 25)),
            Utc::now(),
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Søgnehelligdag\""));

        let deserialized: AbsenceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
