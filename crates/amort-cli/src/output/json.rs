use amort_core::schedule::Schedule;
use amort_core::ComputationOutput;

/// Pretty-print the full computation envelope as JSON.
pub fn print_json(computed: &ComputationOutput<Schedule>) {
    match serde_json::to_string_pretty(computed) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
