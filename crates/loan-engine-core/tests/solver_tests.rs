use loan_engine_core::solvers::principal::{solve_principal, PrincipalInput};
use loan_engine_core::solvers::rate::{solve_rate, RateInput};
use loan_engine_core::solvers::tenure::{payoff_schedule, solve_tenure, PayoffInput, TenureInput};
use loan_engine_core::LoanEngineError;
use pretty_assertions::assert_eq;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Exact annuity payment for round-trip checks, without per-period rounding.
fn exact_payment(principal: Decimal, rate: Decimal, term: u32) -> Decimal {
    let factor = (Decimal::ONE + rate).powi(term as i64);
    principal * rate * factor / (factor - Decimal::ONE)
}

// ===========================================================================
// RateSolver tests
// ===========================================================================

#[test]
fn test_rate_round_trip() {
    // Payment generated at 1% per month must solve back to 1% within 1e-6
    let payment = exact_payment(dec!(100000), dec!(0.01), 12);
    let input = RateInput {
        principal: dec!(100000),
        payment,
        term: 12,
        periods_per_year: 12,
    };
    let result = solve_rate(&input).unwrap();
    let solved = result.result.periodic_rate;

    assert!(
        (solved - dec!(0.01)).abs() <= dec!(0.000001),
        "expected ~0.01, got {solved}"
    );
    assert_eq!(result.result.annual_rate_pct, dec!(12));
}

#[test]
fn test_rate_solver_emits_schedule_of_term_length() {
    let payment = exact_payment(dec!(500000), dec!(0.008), 36);
    let input = RateInput {
        principal: dec!(500000),
        payment,
        term: 36,
        periods_per_year: 12,
    };
    let result = solve_rate(&input).unwrap();
    assert_eq!(result.result.schedule.len(), 36);
    assert_eq!(result.result.schedule.last().unwrap().balance, Decimal::ZERO);
}

#[test]
fn test_rate_long_term_loan() {
    // 20-year monthly loan. Early bisection midpoints push (1+r)^240 far
    // beyond the decimal range; the solve must still converge.
    let input = RateInput {
        principal: dec!(1000000),
        payment: dec!(10000),
        term: 240,
        periods_per_year: 12,
    };
    let result = solve_rate(&input).unwrap();
    let out = &result.result;

    // Implied monthly rate ~0.877% (about 10.5% annualized)
    assert!(
        out.periodic_rate > dec!(0.008) && out.periodic_rate < dec!(0.0095),
        "expected ~0.0088, got {}",
        out.periodic_rate
    );
    assert_eq!(out.schedule.len(), 240);
    assert_eq!(out.schedule.last().unwrap().balance, Decimal::ZERO);
}

#[test]
fn test_rate_rejects_unachievable_payment() {
    // 8000 * 12 = 96000 < 100000
    let input = RateInput {
        principal: dec!(100000),
        payment: dec!(8000),
        term: 12,
        periods_per_year: 12,
    };
    assert!(matches!(
        solve_rate(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));
}

// ===========================================================================
// PrincipalSolver tests
// ===========================================================================

#[test]
fn test_principal_round_trip() {
    let payment = exact_payment(dec!(100000), dec!(0.01), 12);
    let input = PrincipalInput {
        payment,
        periodic_rate: dec!(0.01),
        term: 12,
        charges: Decimal::ZERO,
    };
    let result = solve_principal(&input).unwrap();

    // Recovered principal within one currency unit of the original
    assert!(
        (result.result.principal - dec!(100000)).abs() <= Decimal::ONE,
        "expected ~100000, got {}",
        result.result.principal
    );
}

#[test]
fn test_principal_rejects_bad_inputs() {
    let input = PrincipalInput {
        payment: Decimal::ZERO,
        periodic_rate: dec!(0.01),
        term: 12,
        charges: Decimal::ZERO,
    };
    assert!(matches!(
        solve_principal(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));

    let input = PrincipalInput {
        payment: dec!(5000),
        periodic_rate: dec!(0.01),
        term: 12,
        charges: dec!(-1),
    };
    assert!(matches!(
        solve_principal(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));
}

#[test]
fn test_principal_overflowing_rate_term_is_typed_error() {
    // (1+10)^30 exceeds the decimal range: typed error, not a panic
    let input = PrincipalInput {
        payment: dec!(10000),
        periodic_rate: dec!(10),
        term: 30,
        charges: Decimal::ZERO,
    };
    assert!(matches!(
        solve_principal(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));
}

// ===========================================================================
// TenureSolver / payoff tests
// ===========================================================================

#[test]
fn test_tenure_reference_scenario() {
    // 5 lakh at 1% per month, 10000 per month: ~69.7 months, so 70 periods
    let input = TenureInput {
        loan_amount: dec!(500000),
        payment: dec!(10000),
        periodic_rate: dec!(0.01),
        periods_per_year: 12,
    };
    let result = solve_tenure(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.total_periods, 70);
    assert_eq!(out.years, 5);
    assert_eq!(out.remaining_periods, 10);
    assert_eq!(out.schedule.len(), 70);
    assert_eq!(out.schedule.last().unwrap().balance, Decimal::ZERO);
    assert_eq!(out.total_payment, dec!(700000));
    assert_eq!(out.total_interest, dec!(200000));
}

#[test]
fn test_tenure_non_amortizing_is_error_not_hang() {
    // First-period interest is exactly the payment
    let input = TenureInput {
        loan_amount: dec!(500000),
        payment: dec!(5000),
        periodic_rate: dec!(0.01),
        periods_per_year: 12,
    };
    match solve_tenure(&input).unwrap_err() {
        LoanEngineError::NonAmortizing {
            payment,
            first_period_interest,
        } => {
            assert_eq!(payment, dec!(5000));
            assert_eq!(first_period_interest, dec!(5000));
        }
        other => panic!("expected NonAmortizing, got {other:?}"),
    }
}

#[test]
fn test_payoff_matches_tenure_simulation() {
    let tenure = solve_tenure(&TenureInput {
        loan_amount: dec!(50000),
        payment: dec!(5000),
        periodic_rate: dec!(0.02),
        periods_per_year: 12,
    })
    .unwrap();
    let payoff = payoff_schedule(&PayoffInput {
        balance: dec!(50000),
        payment: dec!(5000),
        periodic_rate: dec!(0.02),
    })
    .unwrap();

    assert_eq!(
        payoff.result.periods_to_payoff,
        tenure.result.total_periods
    );
    assert_eq!(payoff.result.schedule, tenure.result.schedule);
    assert_eq!(
        payoff.result.total_paid,
        dec!(5000) * Decimal::from(payoff.result.periods_to_payoff)
    );
}

#[test]
fn test_payoff_final_payment_covers_remainder() {
    let result = payoff_schedule(&PayoffInput {
        balance: dec!(10000),
        payment: dec!(6000),
        periodic_rate: Decimal::ZERO,
    })
    .unwrap();
    let out = &result.result;

    assert_eq!(out.periods_to_payoff, 2);
    assert_eq!(out.total_paid, dec!(12000));
    assert_eq!(out.schedule[1].balance, Decimal::ZERO);
}
