use amort_core::schedule::Schedule;

/// Print just the headline figure: the whole-unit total payment over the
/// life of the loan.
pub fn print_minimal(schedule: &Schedule) {
    println!("{}", schedule.summary.total_payment);
}
