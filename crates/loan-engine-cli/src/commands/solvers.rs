use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::solvers::principal::{self, PrincipalInput};
use loan_engine_core::solvers::rate::{self, RateInput};
use loan_engine_core::solvers::tenure::{self, PayoffInput, TenureInput};

use crate::commands::{monthly_rate, total_months};
use crate::input;

/// Arguments for the implied rate solver
#[derive(Args)]
pub struct RateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Known monthly payment
    #[arg(long)]
    pub emi: Option<Decimal>,

    /// Tenure: whole years
    #[arg(long)]
    pub years: Option<u32>,

    /// Tenure: additional months
    #[arg(long)]
    pub months: Option<u32>,
}

/// Arguments for the principal solver
#[derive(Args)]
pub struct PrincipalArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Known monthly payment
    #[arg(long)]
    pub emi: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Tenure: whole years
    #[arg(long)]
    pub years: Option<u32>,

    /// Tenure: additional months
    #[arg(long)]
    pub months: Option<u32>,

    /// Upfront charges added to the total payable amount
    #[arg(long)]
    pub charges: Option<Decimal>,
}

/// Arguments for the tenure solver
#[derive(Args)]
pub struct TenureArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding loan amount
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Known monthly payment
    #[arg(long)]
    pub emi: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Option<Decimal>,
}

/// Arguments for the debt payoff projection
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current debt balance
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Fixed monthly payment
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,
}

pub fn run_rate(args: RateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rate_input: RateInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RateInput {
            principal: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            payment: args.emi.ok_or("--emi is required (or provide --input)")?,
            term: total_months(args.years, args.months)?,
            periods_per_year: 12,
        }
    };

    let result = rate::solve_rate(&rate_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_principal(args: PrincipalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let principal_input: PrincipalInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PrincipalInput {
            payment: args.emi.ok_or("--emi is required (or provide --input)")?,
            periodic_rate: monthly_rate(
                args.annual_rate
                    .ok_or("--annual-rate is required (or provide --input)")?,
            ),
            term: total_months(args.years, args.months)?,
            charges: args.charges.unwrap_or(Decimal::ZERO),
        }
    };

    let result = principal::solve_principal(&principal_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_tenure(args: TenureArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tenure_input: TenureInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        TenureInput {
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            payment: args.emi.ok_or("--emi is required (or provide --input)")?,
            periodic_rate: monthly_rate(
                args.annual_rate
                    .ok_or("--annual-rate is required (or provide --input)")?,
            ),
            periods_per_year: 12,
        }
    };

    let result = tenure::solve_tenure(&tenure_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payoff_input: PayoffInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PayoffInput {
            balance: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            payment: args
                .monthly_payment
                .ok_or("--monthly-payment is required (or provide --input)")?,
            periodic_rate: monthly_rate(
                args.annual_rate
                    .ok_or("--annual-rate is required (or provide --input)")?,
            ),
        }
    };

    let result = tenure::payoff_schedule(&payoff_input)?;
    Ok(serde_json::to_value(result)?)
}
