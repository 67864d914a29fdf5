use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::schedule::{self, ScheduleInput};

use crate::commands::{monthly_rate, total_months};
use crate::input;

/// Arguments for EMI schedule construction
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 12 for 12%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Tenure: whole years
    #[arg(long)]
    pub years: Option<u32>,

    /// Tenure: additional months
    #[arg(long)]
    pub months: Option<u32>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            periodic_rate: monthly_rate(
                args.annual_rate
                    .ok_or("--annual-rate is required (or provide --input)")?,
            ),
            term: total_months(args.years, args.months)?,
        }
    };

    let result = schedule::build_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
