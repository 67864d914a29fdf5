//! Level-payment (EMI) amortization schedules.
//!
//! Standard annuity payment `P * r * (1+r)^n / ((1+r)^n - 1)`, degenerating
//! to `P / n` at a zero rate, followed by period-by-period schedule
//! generation. Recorded figures are rounded to whole currency units each
//! period while the running balance is carried at full precision. All math
//! in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::types::{
    round_currency, with_metadata, ComputationOutput, Money, PaymentRecord, PaymentSchedule, Rate,
};
use crate::LoanEngineResult;

/// Periodic rate above which the input was almost certainly an annual rate.
const HIGH_PERIODIC_RATE: Decimal = dec!(0.05);

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Schedule construction input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Loan principal.
    pub principal: Money,
    /// Interest rate per payment period (0.01 = 1% per period).
    pub periodic_rate: Rate,
    /// Total number of payment periods.
    pub term: u32,
}

/// Schedule construction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    /// Fixed payment per period (EMI).
    pub payment: Money,
    /// Total interest over the life of the loan.
    pub total_interest: Money,
    /// Total amount paid (principal + interest).
    pub total_payment: Money,
    /// Period-by-period breakdown.
    pub schedule: PaymentSchedule,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the fixed payment and full amortization schedule for a loan.
pub fn build_schedule(input: &ScheduleInput) -> LoanEngineResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_loan_terms(input.principal, input.periodic_rate, input.term)?;

    if input.periodic_rate > HIGH_PERIODIC_RATE {
        warnings.push(format!(
            "Periodic rate {} exceeds 5% per period — check that the rate is per period, not annual",
            input.periodic_rate
        ));
    }

    let payment = annuity_payment(input.principal, input.periodic_rate, input.term)?;
    let total_payment = payment * Decimal::from(input.term);
    let total_interest = total_payment - input.principal;
    let schedule = amortize(input.principal, input.periodic_rate, payment, input.term);

    let output = ScheduleOutput {
        payment: round_currency(payment),
        total_interest: round_currency(total_interest),
        total_payment: round_currency(total_payment),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-payment annuity amortization",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Shared amortization primitives
// ---------------------------------------------------------------------------

/// Fixed periodic payment for a fully amortizing loan.
///
/// Uses checked decimal arithmetic: `(1+r)^n` outgrows `Decimal` for large
/// rate/term combinations, and that must surface as a typed error rather
/// than a panic.
pub(crate) fn annuity_payment(principal: Money, rate: Rate, term: u32) -> LoanEngineResult<Money> {
    if rate.is_zero() {
        return Ok(principal / Decimal::from(term));
    }

    let overflow = || LoanEngineError::InvalidInput {
        field: "periodic_rate".into(),
        reason: format!("annuity payment overflows decimal range at rate {rate} over {term} periods"),
    };

    let factor = (Decimal::ONE + rate)
        .checked_powi(term as i64)
        .ok_or_else(overflow)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(LoanEngineError::DivisionByZero {
            context: format!("annuity denominator (1+r)^n - 1 at rate {rate}, term {term}"),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .map(|v| v / denominator)
        .ok_or_else(overflow)
}

/// Run the amortization recurrence for a fixed number of periods.
///
/// The running balance stays at full precision; each record holds the
/// rounded snapshot, with the balance clamped to zero once paid off.
pub(crate) fn amortize(
    principal: Money,
    rate: Rate,
    payment: Money,
    term: u32,
) -> PaymentSchedule {
    let mut balance = principal;
    let mut cumulative = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(term as usize);

    for period in 1..=term {
        let interest = balance * rate;
        let principal_paid = payment - interest;
        balance -= principal_paid;
        cumulative += payment;

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

    schedule
}

/// Shared precondition checks for principal / rate / term triples.
pub(crate) fn validate_loan_terms(
    principal: Money,
    rate: Rate,
    term: u32,
) -> LoanEngineResult<()> {
    if principal <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "principal".into(),
            reason: "must be positive".into(),
        });
    }
    if rate < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "must be zero or positive".into(),
        });
    }
    if term == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "term".into(),
            reason: "must be a positive number of periods".into(),
        });
    }
    Ok(())
}
