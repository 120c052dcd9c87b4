use std::io;

use amort_core::schedule::Schedule;

/// Serialize the unrounded schedule rows as CSV, one line per period
/// including the disbursement row. Full-precision figures, suitable for
/// spreadsheet import.
pub fn print_csv(schedule: &Schedule) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record([
        "period",
        "due_date",
        "principal",
        "interest",
        "total_payment",
        "remaining_principal",
    ]);
    for row in &schedule.rows {
        let _ = wtr.write_record([
            row.period.to_string(),
            row.due_date.format("%d %b %Y").to_string(),
            row.principal_portion.to_string(),
            row.interest_portion.to_string(),
            row.total_payment.to_string(),
            row.remaining_principal.to_string(),
        ]);
    }

    let _ = wtr.flush();
}
