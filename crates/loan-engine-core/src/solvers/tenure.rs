//! Loan tenure and debt payoff via direct period-by-period simulation.
//!
//! No closed form here: the balance recurrence is run until it reaches
//! zero, which also yields the schedule for free. A payment that does not
//! cover the first period's interest would never terminate, so that case
//! is rejected up front as `NonAmortizing`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::solvers::default_periods_per_year;
use crate::types::{
    round_currency, with_metadata, ComputationOutput, Money, PaymentRecord, PaymentSchedule, Rate,
};
use crate::LoanEngineResult;

/// Tenure solver input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureInput {
    /// Outstanding loan amount.
    pub loan_amount: Money,
    /// Fixed payment per period.
    pub payment: Money,
    /// Interest rate per payment period.
    pub periodic_rate: Rate,
    /// Payment periods per year, for the years/periods display split.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

/// Tenure solver output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureOutput {
    /// Total number of periods until payoff.
    pub total_periods: u32,
    /// Whole years component of the tenure.
    pub years: u32,
    /// Leftover periods beyond the whole years.
    pub remaining_periods: u32,
    /// Total interest over the life of the loan.
    pub total_interest: Money,
    /// Total amount paid.
    pub total_payment: Money,
    /// Period-by-period breakdown, final balance clamped to zero.
    pub schedule: PaymentSchedule,
}

/// Debt payoff input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffInput {
    /// Current debt balance.
    pub balance: Money,
    /// Fixed payment per period.
    pub payment: Money,
    /// Interest rate per payment period.
    pub periodic_rate: Rate,
}

/// Debt payoff output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffOutput {
    /// Periods until the balance reaches zero.
    pub periods_to_payoff: u32,
    /// Total amount paid, including the final full payment.
    pub total_paid: Money,
    /// Interest component of the total paid.
    pub total_interest: Money,
    /// Period-by-period breakdown with cumulative amounts paid.
    pub schedule: PaymentSchedule,
}

/// Solve for the number of periods needed to amortize a loan.
pub fn solve_tenure(input: &TenureInput) -> LoanEngineResult<ComputationOutput<TenureOutput>> {
    let start = Instant::now();

    validate(input.loan_amount, "loan_amount", input.payment, input.periodic_rate)?;
    if input.periods_per_year == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "periods_per_year".into(),
            reason: "must be positive".into(),
        });
    }

    let (total_periods, schedule) =
        simulate(input.loan_amount, input.payment, input.periodic_rate)?;

    let total_payment = input.payment * Decimal::from(total_periods);
    let total_interest = total_payment - input.loan_amount;

    let output = TenureOutput {
        total_periods,
        years: total_periods / input.periods_per_year,
        remaining_periods: total_periods % input.periods_per_year,
        total_interest: round_currency(total_interest),
        total_payment: round_currency(total_payment),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Direct amortization simulation until zero balance",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// Project how long a fixed payment takes to clear an existing debt.
pub fn payoff_schedule(input: &PayoffInput) -> LoanEngineResult<ComputationOutput<PayoffOutput>> {
    let start = Instant::now();

    validate(input.balance, "balance", input.payment, input.periodic_rate)?;

    let (periods, schedule) = simulate(input.balance, input.payment, input.periodic_rate)?;

    let total_paid = input.payment * Decimal::from(periods);
    let total_interest = total_paid - input.balance;

    let output = PayoffOutput {
        periods_to_payoff: periods,
        total_paid: round_currency(total_paid),
        total_interest: round_currency(total_interest),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Direct amortization simulation until zero balance",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// Run the amortization recurrence until the balance reaches zero.
///
/// Termination: the `NonAmortizing` guard ensures the first period retires
/// some principal, and the principal portion only grows as the balance
/// falls, so the loop is bounded.
fn simulate(
    opening_balance: Money,
    payment: Money,
    rate: Rate,
) -> LoanEngineResult<(u32, PaymentSchedule)> {
    let first_period_interest = opening_balance * rate;
    if payment <= first_period_interest {
        return Err(LoanEngineError::NonAmortizing {
            payment,
            first_period_interest,
        });
    }

    let mut balance = opening_balance;
    let mut cumulative = Decimal::ZERO;
    let mut period: u32 = 0;
    let mut schedule: PaymentSchedule = Vec::new();

    while balance > Decimal::ZERO {
        let interest = balance * rate;
        let principal_paid = payment - interest;
        balance -= principal_paid;
        cumulative += payment;
        period += 1;

        schedule.push(PaymentRecord {
            period,
            interest: round_currency(interest),
            principal: round_currency(principal_paid),
            payment: round_currency(payment),
            balance: if balance > Decimal::ZERO {
                round_currency(balance)
            } else {
                Decimal::ZERO
            },
            cumulative_paid: round_currency(cumulative),
        });
    }

    Ok((period, schedule))
}

fn validate(amount: Money, amount_field: &str, payment: Money, rate: Rate) -> LoanEngineResult<()> {
    if amount <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: amount_field.into(),
            reason: "must be positive".into(),
        });
    }
    if payment <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "payment".into(),
            reason: "must be positive".into(),
        });
    }
    if rate < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "must be zero or positive".into(),
        });
    }
    Ok(())
}
