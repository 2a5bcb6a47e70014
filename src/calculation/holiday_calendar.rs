//! Danish public holiday calendar.
//!
//! This module generates the set of Søgnehelligdage (Danish public holidays)
//! for a given year. Three holidays are fixed dates and seven are computed
//! as day offsets from Easter Sunday.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::easter::easter_sunday;

/// The number of Danish public holidays in every calendar year.
///
/// Other components rely on this count: the auto-population job sizes its
/// "is this year already populated" check as `employees × HOLIDAYS_PER_YEAR`.
pub const HOLIDAYS_PER_YEAR: usize = 10;

/// A single public holiday occurrence in a specific year.
///
/// Occurrences are derived fresh from the calendar each time they are
/// needed and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayOccurrence {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The Danish name of the holiday (e.g., "Langfredag").
    pub name: String,
}

/// Returns all Danish public holidays for the given year, sorted by date.
///
/// Fixed holidays: Nytårsdag (Jan 1), Juledag (Dec 25), 2. juledag (Dec 26).
/// Movable holidays, as offsets from Easter Sunday: Skærtorsdag (−3),
/// Langfredag (−2), Påskedag (0), 2. påskedag (+1), Kristi himmelfartsdag
/// (+39), Pinsedag (+49), 2. pinsedag (+50).
///
/// # Arguments
///
/// * `year` - The calendar year to generate holidays for
///
/// # Returns
///
/// Exactly [`HOLIDAYS_PER_YEAR`] occurrences in strictly ascending date order.
///
/// # Examples
///
/// ```
/// use sh_engine::calculation::{holidays_for_year, HOLIDAYS_PER_YEAR};
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2025);
/// assert_eq!(holidays.len(), HOLIDAYS_PER_YEAR);
/// assert_eq!(holidays[0].name, "Nytårsdag");
/// assert_eq!(
///     holidays[2].date,
///     NaiveDate::from_ymd_opt(2025, 4, 18).unwrap() // Langfredag
/// );
/// ```
pub fn holidays_for_year(year: i32) -> Vec<HolidayOccurrence> {
    let easter = easter_sunday(year);

    let fixed = |month: u32, day: u32| {
        NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday is a valid calendar date")
    };

    let mut holidays = vec![
        HolidayOccurrence {
            date: fixed(1, 1),
            name: "Nytårsdag".to_string(),
        },
        HolidayOccurrence {
            date: easter - Duration::days(3),
            name: "Skærtorsdag".to_string(),
        },
        HolidayOccurrence {
            date: easter - Duration::days(2),
            name: "Langfredag".to_string(),
        },
        HolidayOccurrence {
            date: easter,
            name: "Påskedag".to_string(),
        },
        HolidayOccurrence {
            date: easter + Duration::days(1),
            name: "2. påskedag".to_string(),
        },
        HolidayOccurrence {
            date: easter + Duration::days(39),
            name: "Kristi himmelfartsdag".to_string(),
        },
        HolidayOccurrence {
            date: easter + Duration::days(49),
            name: "Pinsedag".to_string(),
        },
        HolidayOccurrence {
            date: easter + Duration::days(50),
            name: "2. pinsedag".to_string(),
        },
        HolidayOccurrence {
            date: fixed(12, 25),
            name: "Juledag".to_string(),
        },
        HolidayOccurrence {
            date: fixed(12, 26),
            name: "2. juledag".to_string(),
        },
    ];

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Looks up the holiday name for a date, if the date is a public holiday.
///
/// # Examples
///
/// ```
/// use sh_engine::calculation::holiday_name_for_date;
/// use chrono::NaiveDate;
///
/// let whit_monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
/// assert_eq!(holiday_name_for_date(whit_monday), Some("2. pinsedag".to_string()));
///
/// let ordinary_day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// assert_eq!(holiday_name_for_date(ordinary_day), None);
/// ```
pub fn holiday_name_for_date(date: NaiveDate) -> Option<String> {
    use chrono::Datelike;
    holidays_for_year(date.year())
        .into_iter()
        .find(|h| h.date == date)
        .map(|h| h.name)
}
