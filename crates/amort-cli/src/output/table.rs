use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use amort_core::rounding::{format_currency, format_percent};
use amort_core::schedule::Schedule;
use amort_core::ComputationOutput;

/// Render the schedule as a document-style table: a header block with the
/// loan terms, whole-unit rounded rows and a synthesized Total row,
/// followed by the derivation narrative and any warnings.
pub fn print_table(computed: &ComputationOutput<Schedule>) {
    print_header(&computed.assumptions);

    let schedule = &computed.result;
    let mut builder = Builder::default();
    builder.push_record([
        "Period",
        "Due Date",
        "Principal",
        "Interest",
        "Installment",
        "Outstanding",
    ]);
    for row in &schedule.rows {
        builder.push_record([
            row.period.to_string(),
            row.due_date.format("%d %b %Y").to_string(),
            format_currency(row.principal_portion),
            format_currency(row.interest_portion),
            format_currency(row.total_payment),
            format_currency(row.remaining_principal),
        ]);
    }
    builder.push_record([
        "Total".to_string(),
        String::new(),
        format_currency(schedule.summary.total_principal),
        format_currency(schedule.summary.total_interest),
        format_currency(schedule.summary.total_payment),
        String::new(),
    ]);
    println!("{}", Table::from(builder));

    if let Some(ref narrative) = schedule.narrative {
        println!("\n{}", narrative);
    }

    if !computed.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &computed.warnings {
            println!("  - {}", warning);
        }
    }
}

fn print_header(assumptions: &Value) {
    if let Some(customer) = assumptions.get("customer").and_then(Value::as_str) {
        println!("Customer: {}", customer);
    }
    if let Some(principal) = assumption_decimal(assumptions, "principal") {
        println!("Principal: {}", format_currency(principal));
    }
    if let Some(rate) = assumption_decimal(assumptions, "annual_rate") {
        println!("Annual rate: {}", format_percent(rate));
    }
    if let Some(tenor) = assumptions.get("tenor_months").and_then(Value::as_u64) {
        println!("Tenor: {} months", tenor);
    }
    if let Some(method) = assumptions.get("method").and_then(Value::as_str) {
        println!("Method: {}", method);
    }
    println!();
}

// Decimal assumptions are serialized as strings in the envelope.
fn assumption_decimal(assumptions: &Value, key: &str) -> Option<Decimal> {
    assumptions
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| Decimal::from_str(s).ok())
}
