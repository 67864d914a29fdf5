//! Principal recovery from a known payment: closed-form annuity inversion.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::schedule::amortize;
use crate::types::{
    round_currency, with_metadata, ComputationOutput, Money, PaymentSchedule, Rate,
};
use crate::LoanEngineResult;

/// Principal solver input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalInput {
    /// Known fixed payment per period.
    pub payment: Money,
    /// Interest rate per payment period.
    pub periodic_rate: Rate,
    /// Total number of payment periods.
    pub term: u32,
    /// Upfront charges added to the total payable amount.
    #[serde(default)]
    pub charges: Money,
}

/// Principal solver output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalOutput {
    /// Recovered loan principal.
    pub principal: Money,
    /// Total interest over the life of the loan.
    pub total_interest: Money,
    /// Upfront charges, echoed back.
    pub total_charges: Money,
    /// Total payable amount (principal + interest + charges).
    pub total_payment: Money,
    /// Schedule for the recovered principal.
    pub schedule: PaymentSchedule,
}

/// Recover the principal a given payment can service at a known rate and term.
///
/// Inverts the annuity payment formula: `P = payment * ((1+r)^n - 1) / (r * (1+r)^n)`.
/// At a zero rate this degenerates to `payment * n`.
pub fn solve_principal(
    input: &PrincipalInput,
) -> LoanEngineResult<ComputationOutput<PrincipalOutput>> {
    let start = Instant::now();

    validate(input)?;

    let term_dec = Decimal::from(input.term);
    let principal = if input.periodic_rate.is_zero() {
        input.payment * term_dec
    } else {
        let overflow = || LoanEngineError::InvalidInput {
            field: "periodic_rate".into(),
            reason: format!(
                "annuity inversion overflows decimal range at rate {} over {} periods",
                input.periodic_rate, input.term
            ),
        };

        let factor = (Decimal::ONE + input.periodic_rate)
            .checked_powi(input.term as i64)
            .ok_or_else(overflow)?;
        let denominator = input.periodic_rate.checked_mul(factor).ok_or_else(overflow)?;
        if denominator.is_zero() {
            return Err(LoanEngineError::DivisionByZero {
                context: format!(
                    "annuity inversion denominator r*(1+r)^n at rate {}, term {}",
                    input.periodic_rate, input.term
                ),
            });
        }
        input
            .payment
            .checked_mul(factor - Decimal::ONE)
            .map(|v| v / denominator)
            .ok_or_else(overflow)?
    };

    let total_interest = input.payment * term_dec - principal;
    let total_payment = principal + total_interest + input.charges;
    let schedule = amortize(principal, input.periodic_rate, input.payment, input.term);

    let output = PrincipalOutput {
        principal: round_currency(principal),
        total_interest: round_currency(total_interest),
        total_charges: round_currency(input.charges),
        total_payment: round_currency(total_payment),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Closed-form annuity inversion",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

fn validate(input: &PrincipalInput) -> LoanEngineResult<()> {
    if input.payment <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "payment".into(),
            reason: "must be positive".into(),
        });
    }
    if input.periodic_rate < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "must be zero or positive".into(),
        });
    }
    if input.term == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "term".into(),
            reason: "must be a positive number of periods".into(),
        });
    }
    if input.charges < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "charges".into(),
            reason: "must be zero or positive".into(),
        });
    }
    Ok(())
}
