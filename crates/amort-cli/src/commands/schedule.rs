use std::fs;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;

use amort_core::schedule::{build_schedule, RepaymentMethod, Schedule, ScheduleRequest};
use amort_core::ComputationOutput;

use crate::input;

/// Arguments for building a repayment schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in currency units
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual nominal rate as a decimal (0.12 = 12%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Tenor in months
    #[arg(long)]
    pub tenor_months: Option<u32>,

    /// Repayment method: annuity, effective or flat
    #[arg(long)]
    pub method: Option<String>,

    /// Disbursement date (YYYY-MM-DD)
    #[arg(long)]
    pub disbursement_date: Option<NaiveDate>,

    /// First due date (YYYY-MM-DD); defaults to one month after disbursement
    #[arg(long)]
    pub first_due_date: Option<NaiveDate>,

    /// Customer label carried into exports
    #[arg(long, default_value = "Customer")]
    pub customer: String,

    /// Write the request parameters as JSON, so a later run can rebuild
    /// the identical schedule via --input
    #[arg(long)]
    pub save_params: Option<String>,
}

pub fn run_schedule(
    args: ScheduleArgs,
) -> Result<ComputationOutput<Schedule>, Box<dyn std::error::Error>> {
    let request: ScheduleRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let disbursement_date = args
            .disbursement_date
            .ok_or("--disbursement-date is required (or provide --input)")?;
        let first_due_date = match args.first_due_date {
            Some(date) => date,
            None => disbursement_date
                .checked_add_months(Months::new(1))
                .ok_or("default first due date out of range")?,
        };
        let method = args
            .method
            .as_deref()
            .ok_or("--method is required (or provide --input)")?;

        ScheduleRequest {
            customer_name: args.customer.clone(),
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            tenor_months: args
                .tenor_months
                .ok_or("--tenor-months is required (or provide --input)")?,
            method: RepaymentMethod::from_str(method)?,
            disbursement_date,
            first_due_date,
        }
    };

    if let Some(ref path) = args.save_params {
        fs::write(path, serde_json::to_string_pretty(&request)?)?;
    }

    let computed = build_schedule(&request)?;
    Ok(computed)
}
