//! Rounding reconciliation passes applied after row generation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{ScheduleRow, ScheduleSummary};
use crate::rounding::round_currency;
use crate::types::Money;

/// Principal residue below this threshold is dropped rather than surfaced.
const RESIDUAL_EPSILON: Decimal = dec!(0.000001);

/// Sweep any leftover principal residue into the final installment's
/// interest and total, forcing the outstanding balance to land exactly
/// on zero.
pub(super) fn sweep_residual(rows: &mut [ScheduleRow]) {
    if let Some(last) = rows.last_mut() {
        let residual = last.remaining_principal;
        if residual.abs() > RESIDUAL_EPSILON {
            last.interest_portion += residual;
            last.total_payment += residual;
        }
        last.remaining_principal = Decimal::ZERO;
    }
}

/// Force the whole-unit summary identity: rounded total payment equals
/// rounded total principal plus rounded total interest. Returns the
/// whole-unit shift absorbed by the final installment's interest.
///
/// The shift lands on the interest column only: a shift applied to both
/// interest and total moves both rounded sums in lockstep and leaves the
/// identity gap unchanged.
pub(super) fn reconcile_totals(rows: &mut [ScheduleRow]) -> Money {
    let rounded_payment: Money = repayment_rows(rows).map(|r| round_currency(r.total_payment)).sum();
    let rounded_principal: Money = repayment_rows(rows)
        .map(|r| round_currency(r.principal_portion))
        .sum();
    let rounded_interest: Money = repayment_rows(rows)
        .map(|r| round_currency(r.interest_portion))
        .sum();

    let shift = (rounded_payment - rounded_principal) - rounded_interest;
    if !shift.is_zero() {
        if let Some(last) = rows.last_mut() {
            last.interest_portion += shift;
        }
    }
    shift
}

/// Whole-unit totals over the repayment periods, post-adjustment.
pub(super) fn summarize(rows: &[ScheduleRow]) -> ScheduleSummary {
    ScheduleSummary {
        total_principal: repayment_rows(rows)
            .map(|r| round_currency(r.principal_portion))
            .sum(),
        total_interest: repayment_rows(rows)
            .map(|r| round_currency(r.interest_portion))
            .sum(),
        total_payment: repayment_rows(rows).map(|r| round_currency(r.total_payment)).sum(),
    }
}

fn repayment_rows(rows: &[ScheduleRow]) -> impl Iterator<Item = &ScheduleRow> {
    rows.iter().filter(|r| r.period > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(period: u32, principal: Decimal, interest: Decimal, remaining: Decimal) -> ScheduleRow {
        ScheduleRow {
            period,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            principal_portion: principal,
            interest_portion: interest,
            total_payment: principal + interest,
            remaining_principal: remaining,
        }
    }

    #[test]
    fn test_residual_sweep_moves_residue_to_interest() {
        let mut rows = vec![
            row(0, dec!(0), dec!(0), dec!(200)),
            row(1, dec!(100), dec!(2), dec!(100)),
            row(2, dec!(100), dec!(1), dec!(0.25)),
        ];
        sweep_residual(&mut rows);
        let last = rows.last().unwrap();
        assert_eq!(last.interest_portion, dec!(1.25));
        assert_eq!(last.total_payment, dec!(101.25));
        assert_eq!(last.remaining_principal, Decimal::ZERO);
    }

    #[test]
    fn test_subthreshold_residue_dropped_silently() {
        let mut rows = vec![row(1, dec!(100), dec!(1), dec!(0.0000002))];
        sweep_residual(&mut rows);
        let last = rows.last().unwrap();
        assert_eq!(last.interest_portion, dec!(1));
        assert_eq!(last.remaining_principal, Decimal::ZERO);
    }

    #[test]
    fn test_reconcile_closes_identity_gap() {
        // Each row rounds its total up (20.8 -> 21) while the columns round
        // down (10 + 10), drifting the identity by one unit per row.
        let mut rows = vec![
            row(1, dec!(10.4), dec!(10.4), dec!(20)),
            row(2, dec!(10.4), dec!(10.4), dec!(10)),
            row(3, dec!(10.4), dec!(10.4), dec!(0)),
        ];
        let shift = reconcile_totals(&mut rows);
        assert_eq!(shift, dec!(3));

        let summary = summarize(&rows);
        assert_eq!(
            summary.total_payment,
            summary.total_principal + summary.total_interest
        );
    }

    #[test]
    fn test_reconcile_noop_when_already_consistent() {
        let mut rows = vec![
            row(1, dec!(100), dec!(12), dec!(100)),
            row(2, dec!(100), dec!(11), dec!(0)),
        ];
        let shift = reconcile_totals(&mut rows);
        assert_eq!(shift, Decimal::ZERO);

        let summary = summarize(&rows);
        assert_eq!(summary.total_principal, dec!(200));
        assert_eq!(summary.total_interest, dec!(23));
        assert_eq!(summary.total_payment, dec!(223));
    }

    #[test]
    fn test_disbursement_row_excluded_from_totals() {
        let rows = vec![
            row(0, dec!(0), dec!(0), dec!(100)),
            row(1, dec!(100), dec!(1), dec!(0)),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_principal, dec!(100));
    }
}
