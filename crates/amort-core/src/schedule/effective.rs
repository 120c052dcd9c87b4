//! Effective method: equal principal installments, declining-balance interest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{ScheduleRequest, ScheduleRow};
use crate::daycount;
use crate::types::Money;
use crate::AmortResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Generate rows 1..=tenor. Period 1 charges the prorated stub interest
/// against the original principal; later periods charge the flat monthly
/// rate against the balance at the start of the period.
pub(super) fn generate(
    request: &ScheduleRequest,
    stub_interest: Money,
) -> AmortResult<Vec<ScheduleRow>> {
    let monthly = request.annual_rate / MONTHS_PER_YEAR;
    let installment = request.principal / Decimal::from(request.tenor_months);

    let mut rows = Vec::with_capacity(request.tenor_months as usize);
    let mut remaining = request.principal;

    for period in 1..=request.tenor_months {
        let interest = if period == 1 {
            stub_interest
        } else {
            remaining * monthly
        };
        remaining -= installment;
        rows.push(ScheduleRow {
            period,
            due_date: daycount::due_date(request.first_due_date, period)?,
            principal_portion: installment,
            interest_portion: interest,
            total_payment: installment + interest,
            remaining_principal: remaining,
        });
    }

    Ok(rows)
}
