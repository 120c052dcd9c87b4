//! 30/360 day count for the stub period and calendar month arithmetic.
//!
//! The gap between disbursement and the first due date is usually not
//! exactly one month. The stub interest covers that actual gap under the
//! 30/360 convention; every later period is charged a flat monthly rate.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::AmortError;
use crate::types::{Money, Rate};
use crate::AmortResult;

/// Notional month length under the 30/360 convention.
const THIRTY_DAY_MONTH: i64 = 30;

/// Day-count denominator (360-day year).
const DAYS_PER_YEAR: Decimal = dec!(360);

/// Number of stub days between disbursement and the first due date.
///
/// A matching day-of-month counts as exactly one 30-day month; otherwise
/// the actual calendar difference applies, clamped to zero when the first
/// due date precedes disbursement.
pub fn stub_days(disbursement: NaiveDate, first_due: NaiveDate) -> i64 {
    if disbursement.day() == first_due.day() {
        THIRTY_DAY_MONTH
    } else {
        (first_due - disbursement).num_days().max(0)
    }
}

/// Interest accrued over the stub period against the original principal.
pub fn stub_interest(principal: Money, annual_rate: Rate, days: i64) -> Money {
    principal * annual_rate * Decimal::from(days) / DAYS_PER_YEAR
}

/// Due date for a repayment period (1-indexed): first due date plus
/// `period - 1` calendar months, day-of-month clamped to the last valid
/// day of the target month.
pub fn due_date(first_due: NaiveDate, period: u32) -> AmortResult<NaiveDate> {
    first_due
        .checked_add_months(Months::new(period - 1))
        .ok_or_else(|| AmortError::DateError(format!("due date out of range at period {period}")))
}
