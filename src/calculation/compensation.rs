//! Søgnehelligdag compensation formula.
//!
//! This module computes the accrued compensation for one public holiday
//! occurrence: 14.7% of the employee's nominal daily wage, where the nominal
//! day length depends on the weekday the holiday falls on.

use chrono::Weekday;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The accrual percentage applied to the nominal daily wage (14.7%).
pub fn accrual_rate() -> Decimal {
    Decimal::new(147, 3)
}

/// Returns the nominal work-day length for a weekday.
///
/// Monday through Thursday are 7.5-hour days, Friday is a 7-hour day.
/// Saturday and Sunday carry no nominal hours: Danish public holidays
/// falling on a weekend do not accrue compensation.
///
/// # Examples
///
/// ```
/// use sh_engine::calculation::daily_hours;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_hours(Weekday::Mon), Decimal::new(75, 1)); // 7.5
/// assert_eq!(daily_hours(Weekday::Fri), Decimal::new(70, 1)); // 7.0
/// assert_eq!(daily_hours(Weekday::Sun), Decimal::ZERO);
/// ```
pub fn daily_hours(weekday: Weekday) -> Decimal {
    match weekday {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => Decimal::new(75, 1),
        Weekday::Fri => Decimal::new(70, 1),
        Weekday::Sat | Weekday::Sun => Decimal::ZERO,
    }
}

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Applied once at the end of each formula, never per-factor.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes holiday pay for one occurrence, in sentinel form.
///
/// Returns zero when the rate is not positive or the weekday carries no
/// nominal hours. Callers that need to distinguish "no rate configured"
/// from "zero kroner accrued" should use [`compensation`] instead.
///
/// This function is pure and is also used to recompute an entry's amount
/// live when an administrator edits its rate or hours.
///
/// # Arguments
///
/// * `hourly_rate` - The employee's internal hourly rate in kroner
/// * `weekday` - The weekday the holiday falls on
///
/// # Returns
///
/// `round2(hourly_rate × daily_hours × 0.147)`.
///
/// # Examples
///
/// ```
/// use sh_engine::calculation::holiday_pay;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// // 250 kr/h on a Friday: 250 × 7 × 0.147 = 257.25
/// assert_eq!(
///     holiday_pay(Decimal::from(250), Weekday::Fri),
///     Decimal::new(25725, 2)
/// );
/// ```
pub fn holiday_pay(hourly_rate: Decimal, weekday: Weekday) -> Decimal {
    if hourly_rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round2(hourly_rate * daily_hours(weekday) * accrual_rate())
}

/// The outcome of a compensation calculation.
///
/// Distinguishes "the accrual could not be computed because the employee has
/// no usable hourly rate" from "the computation ran and produced an amount"
/// (which is legitimately zero for weekend holidays). Callers must not treat
/// the two the same: the former is an advisory condition surfaced to the
/// user, the latter is a normal ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Compensation {
    /// The accrual was computed.
    Computed {
        /// The nominal day length the formula used.
        daily_hours: Decimal,
        /// The accrued amount, rounded to 2 decimal places.
        amount: Decimal,
    },
    /// No positive hourly rate was available, so no accrual can be computed.
    NotComputable,
}

/// Computes the compensation for one holiday occurrence.
///
/// Returns [`Compensation::NotComputable`] when `hourly_rate` is absent or
/// not positive. A weekend holiday with a valid rate is a normal
/// [`Compensation::Computed`] with a zero amount.
///
/// # Examples
///
/// ```
/// use sh_engine::calculation::{compensation, Compensation};
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let result = compensation(Some(Decimal::from(250)), Weekday::Mon);
/// assert_eq!(
///     result,
///     Compensation::Computed {
///         daily_hours: Decimal::new(75, 1),
///         amount: Decimal::new(27563, 2), // 250 × 7.5 × 0.147 = 275.625 → 275.63
///     }
/// );
///
/// assert_eq!(compensation(None, Weekday::Mon), Compensation::NotComputable);
/// ```
pub fn compensation(hourly_rate: Option<Decimal>, weekday: Weekday) -> Compensation {
    match hourly_rate {
        Some(rate) if rate > Decimal::ZERO => {
            let hours = daily_hours(weekday);
            Compensation::Computed {
                daily_hours: hours,
                amount: round2(rate * hours * accrual_rate()),
            }
        }
        _ => Compensation::NotComputable,
    }
}
