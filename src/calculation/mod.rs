//! Calculation logic for the Søgnehelligdag accrual engine.
//!
//! This module contains the pure calculation functions: the Gregorian Easter
//! date, the Danish public holiday calendar, and the weekday-dependent
//! 14.7% compensation formula. Nothing in here performs I/O.

mod compensation;
mod easter;
mod holiday_calendar;

pub use compensation::{Compensation, accrual_rate, compensation, daily_hours, holiday_pay, round2};
pub use easter::easter_sunday;
pub use holiday_calendar::{
    HOLIDAYS_PER_YEAR, HolidayOccurrence, holiday_name_for_date, holidays_for_year,
};
