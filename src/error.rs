//! Error types for the Søgnehelligdag accrual engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during accrual bookkeeping.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the accrual engine.
///
/// All store-touching operations in the engine return this error type,
/// making it easy to handle errors consistently throughout the application.
/// Pure calendar and compensation calculations never fail for valid input
/// and do not use this type.
///
/// # Example
///
/// ```
/// use sh_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A ledger already holds an accrual entry for the given date.
    #[error("Ledger for employee '{employee_id}' year {year} already has an entry for {date}")]
    DuplicateEntry {
        /// The employee the ledger belongs to.
        employee_id: String,
        /// The ledger year.
        year: i32,
        /// The date that collided.
        date: NaiveDate,
    },

    /// An absence record already exists for the employee, date and reason.
    #[error("Absence for employee '{employee_id}' on {date} already exists")]
    DuplicateAbsence {
        /// The employee the absence belongs to.
        employee_id: String,
        /// The absence date that collided.
        date: NaiveDate,
    },

    /// No accrual entry exists for the given date in the ledger.
    #[error("No entry for {date} in ledger for employee '{employee_id}' year {year}")]
    EntryNotFound {
        /// The employee the ledger belongs to.
        employee_id: String,
        /// The ledger year.
        year: i32,
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// A record was invalid or contained inconsistent data.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backing store failed to complete an operation.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_entry_displays_key() {
        let error = EngineError::DuplicateEntry {
            employee_id: "emp_001".to_string(),
            year: 2025,
            date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Ledger for employee 'emp_001' year 2025 already has an entry for 2025-04-18"
        );
    }

    #[test]
    fn test_duplicate_absence_displays_employee_and_date() {
        let error = EngineError::DuplicateAbsence {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Absence for employee 'emp_001' on 2025-01-01 already exists"
        );
    }

    #[test]
    fn test_entry_not_found_displays_key() {
        let error = EngineError::EntryNotFound {
            employee_id: "emp_002".to_string(),
            year: 2026,
            date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No entry for 2026-12-25 in ledger for employee 'emp_002' year 2026"
        );
    }

    #[test]
    fn test_invalid_record_displays_field_and_message() {
        let error = EngineError::InvalidRecord {
            field: "hours_worked".to_string(),
            message: "required for partial absences".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record field 'hours_worked': required for partial absences"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = EngineError::Storage {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: lock poisoned");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_storage_error() -> EngineResult<()> {
            Err(EngineError::Storage {
                message: "unavailable".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_storage_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
