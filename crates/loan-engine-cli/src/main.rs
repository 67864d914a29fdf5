mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::schedule::ScheduleArgs;
use commands::solvers::{PayoffArgs, PrincipalArgs, RateArgs, TenureArgs};
use commands::words::WordsArgs;

/// Loan amortization calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan amortization calculations with decimal precision",
    long_about = "A CLI for EMI and loan calculations with decimal precision. \
                  Builds full amortization schedules and solves for the implied \
                  interest rate, affordable principal, or loan tenure, with \
                  amounts rendered in the Indian numbering system."
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
    /// Build the EMI and full amortization schedule for a loan
    Schedule(ScheduleArgs),
    /// Solve the implied interest rate from a known EMI
    Rate(RateArgs),
    /// Solve the principal a known EMI can service
    Principal(PrincipalArgs),
    /// Solve how long a loan takes to amortize at a known EMI
    Tenure(TenureArgs),
    /// Project a debt payoff schedule for a fixed monthly payment
    Payoff(PayoffArgs),
    /// Spell an amount in Indian-system words (lakh/crore)
    Words(WordsArgs),
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

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Rate(args) => commands::solvers::run_rate(args),
        Commands::Principal(args) => commands::solvers::run_principal(args),
        Commands::Tenure(args) => commands::solvers::run_tenure(args),
        Commands::Payoff(args) => commands::solvers::run_payoff(args),
        Commands::Words(args) => commands::words::run_words(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
