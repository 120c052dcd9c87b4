//! Annuity method: fixed total installment over a reducing balance.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::{ScheduleRequest, ScheduleRow};
use crate::daycount;
use crate::rounding::{format_currency, format_percent};
use crate::types::Money;
use crate::AmortResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Generate rows 1..=tenor plus the derivation narrative.
pub(super) fn generate(
    request: &ScheduleRequest,
    stub_days: i64,
    stub_interest: Money,
) -> AmortResult<(Vec<ScheduleRow>, String)> {
    let monthly = request.annual_rate / MONTHS_PER_YEAR;
    let pmt = payment(request.principal, monthly, request.tenor_months);

    let mut rows = Vec::with_capacity(request.tenor_months as usize);
    let mut remaining = request.principal;

    // Period 1 amortizes the principal as if a full standard month had
    // elapsed, so later balances match a non-prorated schedule; the
    // day-count adjustment lands entirely in the displayed interest and
    // installment, never in the principal curve.
    let standard_interest = remaining * monthly;
    let first_principal = pmt - standard_interest;
    let adjustment = stub_interest - standard_interest;
    remaining -= first_principal;
    rows.push(ScheduleRow {
        period: 1,
        due_date: request.first_due_date,
        principal_portion: first_principal,
        interest_portion: stub_interest,
        total_payment: pmt + adjustment,
        remaining_principal: remaining,
    });

    for period in 2..=request.tenor_months {
        let interest = remaining * monthly;
        let principal = pmt - interest;
        remaining -= principal;
        rows.push(ScheduleRow {
            period,
            due_date: daycount::due_date(request.first_due_date, period)?,
            principal_portion: principal,
            interest_portion: interest,
            total_payment: pmt,
            remaining_principal: remaining,
        });
    }

    let narrative = narrative(request, monthly, pmt, stub_days, stub_interest, standard_interest);
    Ok((rows, narrative))
}

/// Standard annuity payment. A zero rate degenerates to equal principal
/// installments.
fn payment(principal: Money, monthly: Decimal, tenor_months: u32) -> Money {
    if monthly.is_zero() {
        return principal / Decimal::from(tenor_months);
    }
    let growth = (Decimal::ONE + monthly).powi(tenor_months as i64);
    principal * (monthly * growth) / (growth - Decimal::ONE)
}

fn narrative(
    request: &ScheduleRequest,
    monthly: Decimal,
    pmt: Money,
    stub_days: i64,
    stub_interest: Money,
    standard_interest: Money,
) -> String {
    let first_principal = pmt - standard_interest;
    let adjustment = stub_interest - standard_interest;
    format!(
        "Annuity method\n\
         monthly i = {rate} / 12 = {monthly:.6}\n\
         PMT = P x [ i(1+i)^n / ((1+i)^n - 1) ] = {pmt}\n\
         \n\
         First period ({stub_days}-day stub):\n\
         actual interest = {principal} x {rate} x ({stub_days}/360) = {actual}\n\
         standard interest = {principal} x {monthly:.6} = {standard}\n\
         principal paid = PMT - standard interest = {pmt} - {standard} = {first_principal}\n\
         day-count adjustment = {actual} - {standard} = {adjustment}\n\
         first installment = PMT + adjustment = {pmt} + {adjustment} = {first_total}\n",
        rate = format_percent(request.annual_rate),
        pmt = format_currency(pmt),
        principal = format_currency(request.principal),
        actual = format_currency(stub_interest),
        standard = format_currency(standard_interest),
        first_principal = format_currency(first_principal),
        adjustment = format_currency(adjustment),
        first_total = format_currency(pmt + adjustment),
    )
}
