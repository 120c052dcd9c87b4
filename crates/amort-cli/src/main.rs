mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::schedule::ScheduleArgs;

/// Loan repayment schedule simulator
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Loan repayment schedule simulator",
    long_about = "Builds month-by-month loan repayment schedules with decimal precision. \
                  Supports annuity, effective (declining balance) and flat methods, \
                  30/360 stub-period proration and whole-unit rounding reconciliation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a repayment schedule
    Schedule(ScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(computed) => {
            output::render(&cli.output, &computed);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
