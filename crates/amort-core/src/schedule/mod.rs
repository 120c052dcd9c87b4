//! Month-by-month loan repayment schedules.
//!
//! Builds an amortization table from principal, annual rate, tenor,
//! repayment method and the disbursement/first-due dates, then reconciles
//! rounding so the whole-unit totals stay internally consistent: the
//! principal amortizes exactly to zero and the summed installments equal
//! summed principal plus summed interest. All math in `rust_decimal::Decimal`.

mod annuity;
mod effective;
mod flat;
mod reconcile;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::daycount;
use crate::error::AmortError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::AmortResult;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Repayment method for a loan schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentMethod {
    /// Fixed total installment; the principal portion grows over time.
    Annuity,
    /// Fixed principal installment; interest on the declining balance.
    Effective,
    /// Fixed principal installment; interest on the original principal.
    Flat,
}

impl FromStr for RepaymentMethod {
    type Err = AmortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annuity" => Ok(Self::Annuity),
            "effective" => Ok(Self::Effective),
            "flat" => Ok(Self::Flat),
            _ => Err(AmortError::InvalidMethod {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RepaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Annuity => f.write_str("annuity"),
            Self::Effective => f.write_str("effective"),
            Self::Flat => f.write_str("flat"),
        }
    }
}

/// Input for a schedule computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Customer label carried through to exports; not used in computation.
    #[serde(default = "default_customer")]
    pub customer_name: String,
    /// Loan principal in currency units.
    pub principal: Money,
    /// Annual nominal rate as a decimal (0.12 = 12%).
    pub annual_rate: Rate,
    /// Number of monthly repayment periods.
    pub tenor_months: u32,
    pub method: RepaymentMethod,
    pub disbursement_date: NaiveDate,
    /// Due date of the first installment; must not precede disbursement.
    pub first_due_date: NaiveDate,
}

fn default_customer() -> String {
    "Customer".to_string()
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A single period in the repayment schedule. Period 0 is the disbursement
/// row: no payment, outstanding balance equal to the principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub due_date: NaiveDate,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub total_payment: Money,
    pub remaining_principal: Money,
}

/// Aggregate totals over periods 1..=tenor, in whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

/// A complete, reconciled repayment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub rows: Vec<ScheduleRow>,
    pub summary: ScheduleSummary,
    /// Step-by-step derivation of the first installment (annuity only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

// ---------------------------------------------------------------------------
// Schedule builder
// ---------------------------------------------------------------------------

/// Build a reconciled repayment schedule for a single loan.
///
/// Pure function of the request: identical inputs always produce an
/// identical schedule, so callers may persist the request alone and rebuild
/// the schedule on demand.
pub fn build_schedule(request: &ScheduleRequest) -> AmortResult<ComputationOutput<Schedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(request)?;

    if request.first_due_date < request.disbursement_date {
        warnings.push(format!(
            "first due date {} precedes disbursement {}; stub interest clamped to zero",
            request.first_due_date, request.disbursement_date
        ));
    }

    let stub_days = daycount::stub_days(request.disbursement_date, request.first_due_date);
    let stub_interest = daycount::stub_interest(request.principal, request.annual_rate, stub_days);

    let mut rows = vec![disbursement_row(request)];
    let mut narrative = None;

    match request.method {
        RepaymentMethod::Annuity => {
            let (generated, text) = annuity::generate(request, stub_days, stub_interest)?;
            rows.extend(generated);
            narrative = Some(text);
        }
        RepaymentMethod::Effective => {
            rows.extend(effective::generate(request, stub_interest)?);
        }
        RepaymentMethod::Flat => {
            rows.extend(flat::generate(request, stub_interest)?);
        }
    }

    reconcile::sweep_residual(&mut rows);
    let shift = reconcile::reconcile_totals(&mut rows);
    if !shift.is_zero() {
        warnings.push(format!(
            "rounding drift of {shift} absorbed into the final installment"
        ));
    }

    let summary = reconcile::summarize(&rows);
    let schedule = Schedule {
        rows,
        summary,
        narrative,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Loan Schedule Builder",
        &serde_json::json!({
            "customer": request.customer_name,
            "principal": request.principal,
            "annual_rate": request.annual_rate,
            "tenor_months": request.tenor_months,
            "method": request.method,
            "disbursement_date": request.disbursement_date,
            "first_due_date": request.first_due_date,
        }),
        warnings,
        elapsed,
        schedule,
    ))
}

fn validate(request: &ScheduleRequest) -> AmortResult<()> {
    if request.principal <= Decimal::ZERO {
        return Err(AmortError::InvalidInput {
            field: "principal".into(),
            reason: "must be positive".into(),
        });
    }
    if request.annual_rate < Decimal::ZERO {
        return Err(AmortError::InvalidInput {
            field: "annual_rate".into(),
            reason: "must not be negative".into(),
        });
    }
    if request.tenor_months == 0 {
        return Err(AmortError::InvalidTenor {
            months: request.tenor_months,
        });
    }
    Ok(())
}

fn disbursement_row(request: &ScheduleRequest) -> ScheduleRow {
    ScheduleRow {
        period: 0,
        due_date: request.disbursement_date,
        principal_portion: Decimal::ZERO,
        interest_portion: Decimal::ZERO,
        total_payment: Decimal::ZERO,
        remaining_principal: request.principal,
    }
}
