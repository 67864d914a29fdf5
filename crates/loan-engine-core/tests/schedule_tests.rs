use loan_engine_core::schedule::{build_schedule, ScheduleInput};
use loan_engine_core::LoanEngineError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// ScheduleBuilder tests
// ===========================================================================

fn one_lakh_one_year() -> ScheduleInput {
    // 1 lakh at 12% annual, compounded monthly, over 12 months
    ScheduleInput {
        principal: dec!(100000),
        periodic_rate: dec!(0.01),
        term: 12,
    }
}

#[test]
fn test_reference_emi_one_lakh_twelve_months() {
    let result = build_schedule(&one_lakh_one_year()).unwrap();
    let out = &result.result;

    // Unrounded EMI is 8884.8788; recorded payment rounds to the whole unit
    assert!(
        (out.payment - dec!(8884.88)).abs() <= Decimal::ONE,
        "expected EMI ~8884.88, got {}",
        out.payment
    );

    // Total interest ~6618.55
    assert!(
        (out.total_interest - dec!(6618)).abs() <= Decimal::ONE,
        "expected total interest ~6618, got {}",
        out.total_interest
    );

    assert_eq!(out.total_payment, out.total_interest + dec!(100000));
}

#[test]
fn test_schedule_has_term_records_and_zero_final_balance() {
    let input = ScheduleInput {
        principal: dec!(250000),
        periodic_rate: dec!(0.0075),
        term: 60,
    };
    let result = build_schedule(&input).unwrap();
    let schedule = &result.result.schedule;

    assert_eq!(schedule.len(), 60);
    assert_eq!(schedule.last().unwrap().balance, Decimal::ZERO);

    for record in schedule {
        // Interest + principal recombine to the payment, within rounding
        let recombined = record.interest + record.principal;
        assert!(
            (recombined - record.payment).abs() <= Decimal::ONE,
            "period {}: {} + {} != {}",
            record.period,
            record.interest,
            record.principal,
            record.payment
        );
    }

    for pair in schedule.windows(2) {
        assert!(
            pair[1].balance < pair[0].balance,
            "balance must fall every period"
        );
    }
}

#[test]
fn test_single_period_schedule() {
    let input = ScheduleInput {
        principal: dec!(10000),
        periodic_rate: dec!(0.02),
        term: 1,
    };
    let result = build_schedule(&input).unwrap();
    let out = &result.result;

    // One period: the whole balance plus one period of interest
    assert_eq!(out.payment, dec!(10200));
    assert_eq!(out.schedule.len(), 1);
    assert_eq!(out.schedule[0].interest, dec!(200));
    assert_eq!(out.schedule[0].principal, dec!(10000));
    assert_eq!(out.schedule[0].balance, Decimal::ZERO);
}

#[test]
fn test_zero_rate_schedule_splits_principal_evenly() {
    let input = ScheduleInput {
        principal: dec!(120000),
        periodic_rate: Decimal::ZERO,
        term: 12,
    };
    let result = build_schedule(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.payment, dec!(10000));
    assert_eq!(out.total_interest, Decimal::ZERO);
    for record in &out.schedule {
        assert_eq!(record.interest, Decimal::ZERO);
        assert_eq!(record.principal, dec!(10000));
    }
}

#[test]
fn test_invalid_inputs_rejected() {
    let mut input = one_lakh_one_year();
    input.principal = Decimal::ZERO;
    assert!(matches!(
        build_schedule(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));

    let mut input = one_lakh_one_year();
    input.periodic_rate = dec!(-0.01);
    assert!(matches!(
        build_schedule(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));

    let mut input = one_lakh_one_year();
    input.term = 0;
    assert!(matches!(
        build_schedule(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));
}

#[test]
fn test_overflowing_rate_term_is_typed_error() {
    // (1+10)^30 exceeds the decimal range: typed error, not a panic
    let input = ScheduleInput {
        principal: dec!(100000),
        periodic_rate: dec!(10),
        term: 30,
    };
    assert!(matches!(
        build_schedule(&input).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));
}

#[test]
fn test_methodology_string() {
    let result = build_schedule(&one_lakh_one_year()).unwrap();
    assert_eq!(result.methodology, "Level-payment annuity amortization");
}

#[test]
fn test_envelope_carries_assumptions() {
    let result = build_schedule(&one_lakh_one_year()).unwrap();
    assert_eq!(
        result.assumptions.get("term").and_then(|v| v.as_u64()),
        Some(12)
    );
}
