//! Gregorian Easter date calculation.
//!
//! This module computes the date of Easter Sunday using the anonymous
//! Gregorian algorithm (Meeus/Jones/Butcher). All movable Danish public
//! holidays are derived as day offsets from this date.

use chrono::NaiveDate;

/// Computes the date of Easter Sunday for the given year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which is
/// exact for all years in the Gregorian calendar (1583 onwards). The
/// function is plain arithmetic and accepts any positive year; years
/// before the Gregorian reform produce a date the proleptic calendar
/// would assign, which has no historical meaning.
///
/// # Arguments
///
/// * `year` - The calendar year to compute Easter Sunday for
///
/// # Returns
///
/// The date of Easter Sunday in the given year.
///
/// # Examples
///
/// ```
/// use sh_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// // Easter Sunday 2025 falls on April 20
/// assert_eq!(
///     easter_sunday(2025),
///     NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
/// );
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Easter algorithm yields a valid March or April date")
}
