//! Implied periodic interest rate via bisection.
//!
//! The annuity payment is monotonically increasing in the rate for fixed
//! principal and term, so a bracketing search over [0, 1] per period
//! converges unconditionally once the payment is achievable at all.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::schedule::amortize;
use crate::solvers::default_periods_per_year;
use crate::types::{
    round_currency, with_metadata, ComputationOutput, Money, PaymentSchedule, Rate,
};
use crate::LoanEngineResult;

/// Bisection convergence tolerance on the bracket width.
const RATE_TOLERANCE: Decimal = dec!(0.000001);

/// Defensive iteration cap; the bracket halves each step so ~20 suffice.
const MAX_BISECTION_ITERATIONS: u32 = 100;

/// Rate solver input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateInput {
    /// Loan principal.
    pub principal: Money,
    /// Known fixed payment per period.
    pub payment: Money,
    /// Total number of payment periods.
    pub term: u32,
    /// Payment periods per year, for annualizing the solved rate.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

/// Rate solver output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateOutput {
    /// Solved interest rate per period.
    pub periodic_rate: Rate,
    /// Annualized rate as a display percentage (periodic * periods/year * 100).
    pub annual_rate_pct: Decimal,
    /// Total interest over the life of the loan.
    pub total_interest: Money,
    /// Total amount paid.
    pub total_payment: Money,
    /// Schedule generated at the solved rate.
    pub schedule: PaymentSchedule,
}

/// Recover the periodic rate implied by a known payment, principal and term.
pub fn solve_rate(input: &RateInput) -> LoanEngineResult<ComputationOutput<RateOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;

    let term_dec = Decimal::from(input.term);
    if input.payment * term_dec <= input.principal {
        return Err(LoanEngineError::InvalidInput {
            field: "payment".into(),
            reason: format!(
                "total payments {} do not exceed principal {}; no non-negative rate fits",
                input.payment * term_dec,
                input.principal
            ),
        });
    }

    let mut low = Decimal::ZERO;
    let mut high = Decimal::ONE;
    let mut iterations: u32 = 0;

    while high - low > RATE_TOLERANCE {
        if iterations >= MAX_BISECTION_ITERATIONS {
            return Err(LoanEngineError::ConvergenceFailure {
                function: "solve_rate".into(),
                iterations,
                last_delta: high - low,
            });
        }
        let mid = (low + high) / dec!(2);
        let estimate = payment_estimate(input.principal, mid, input.term);
        if estimate > input.payment {
            high = mid;
        } else {
            low = mid;
        }
        iterations += 1;
    }

    let periodic_rate = low;
    if periodic_rate < RATE_TOLERANCE {
        warnings.push(
            "Solved rate is indistinguishable from zero; payment barely exceeds principal / term"
                .to_string(),
        );
    }

    let annual_rate_pct =
        (periodic_rate * Decimal::from(input.periods_per_year) * dec!(100)).round_dp(2);
    let total_payment = input.payment * term_dec;
    let total_interest = total_payment - input.principal;
    let schedule = amortize(input.principal, periodic_rate, input.payment, input.term);

    let output = RateOutput {
        periodic_rate,
        annual_rate_pct,
        total_interest: round_currency(total_interest),
        total_payment: round_currency(total_payment),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Implied periodic rate via bisection over the annuity payment",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Annuity payment at a candidate rate, written as `P*r / (1 - (1+r)^-n)`
/// so it stays inside the decimal range for any bracket midpoint.
///
/// `(1+r)^n` outgrows `Decimal` for high midpoints on long terms (the
/// unchecked form would panic there); in that regime `(1+r)^-n` is zero to
/// within decimal precision, so the estimate degenerates to `P*r`.
fn payment_estimate(principal: Decimal, rate: Decimal, term: u32) -> Decimal {
    match (Decimal::ONE + rate).checked_powi(term as i64) {
        Some(factor) => principal * rate / (Decimal::ONE - Decimal::ONE / factor),
        None => principal * rate,
    }
}

fn validate(input: &RateInput) -> LoanEngineResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "principal".into(),
            reason: "must be positive".into(),
        });
    }
    if input.payment <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "payment".into(),
            reason: "must be positive".into(),
        });
    }
    if input.term == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "term".into(),
            reason: "must be a positive number of periods".into(),
        });
    }
    if input.periods_per_year == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "periods_per_year".into(),
            reason: "must be positive".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_payment_below_zero_rate_floor() {
        // 12 * 8000 = 96000 < 100000: no non-negative rate can fit
        let input = RateInput {
            principal: dec!(100000),
            payment: dec!(8000),
            term: 12,
            periods_per_year: 12,
        };
        let err = solve_rate(&input).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_near_zero_rate_warning() {
        let input = RateInput {
            principal: dec!(100000),
            payment: dec!(8333.35),
            term: 12,
            periods_per_year: 12,
        };
        let result = solve_rate(&input).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("indistinguishable from zero")));
    }
}
