pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use amort_core::schedule::Schedule;
use amort_core::ComputationOutput;

use crate::OutputFormat;

/// Dispatch output to the appropriate renderer.
pub fn render(format: &OutputFormat, computed: &ComputationOutput<Schedule>) {
    match format {
        OutputFormat::Json => json::print_json(computed),
        OutputFormat::Table => table::print_table(computed),
        OutputFormat::Csv => csv_out::print_csv(&computed.result),
        OutputFormat::Minimal => minimal::print_minimal(&computed.result),
    }
}
