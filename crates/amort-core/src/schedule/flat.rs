//! Flat method: equal principal installments, interest charged at a
//! constant rate against the original principal throughout.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{ScheduleRequest, ScheduleRow};
use crate::daycount;
use crate::types::Money;
use crate::AmortResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Generate rows 1..=tenor. Period 1 charges the prorated stub interest;
/// later periods charge the flat monthly amount computed once against the
/// original principal, never the declining balance.
pub(super) fn generate(
    request: &ScheduleRequest,
    stub_interest: Money,
) -> AmortResult<Vec<ScheduleRow>> {
    let monthly = request.annual_rate / MONTHS_PER_YEAR;
    let installment = request.principal / Decimal::from(request.tenor_months);
    let flat_interest = request.principal * monthly;

    let mut rows = Vec::with_capacity(request.tenor_months as usize);
    let mut remaining = request.principal;

    for period in 1..=request.tenor_months {
        let interest = if period == 1 { stub_interest } else { flat_interest };
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RepaymentMethod;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> ScheduleRequest {
        ScheduleRequest {
            customer_name: "Customer".into(),
            principal: dec!(120000000),
            annual_rate: dec!(0.12),
            tenor_months: 12,
            method: RepaymentMethod::Flat,
            disbursement_date: date(2023, 1, 15),
            first_due_date: date(2023, 3, 1),
        }
    }

    #[test]
    fn test_constant_interest_after_stub() {
        let rows = generate(&request(), dec!(1800000)).unwrap();
        assert_eq!(rows[0].interest_portion, dec!(1800000));
        for row in &rows[1..] {
            assert_eq!(row.interest_portion, dec!(1200000));
            assert_eq!(row.total_payment, dec!(11200000));
        }
    }

    #[test]
    fn test_balance_declines_by_installment() {
        let rows = generate(&request(), dec!(1800000)).unwrap();
        assert_eq!(rows[0].remaining_principal, dec!(110000000));
        assert_eq!(rows[5].remaining_principal, dec!(60000000));
        assert_eq!(rows[11].remaining_principal, Decimal::ZERO);
    }
}
