use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals per period (0.01 = 1% per period). Never as percentages.
pub type Rate = Decimal;

/// One row of an amortization schedule.
///
/// Recorded figures are rounded to the nearest whole currency unit; the
/// running balance is carried at full precision between periods, so
/// `balance` here is the rounded snapshot, clamped to zero at payoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Period number (1-indexed).
    pub period: u32,
    /// Interest portion of this period's payment.
    pub interest: Money,
    /// Principal portion of this period's payment.
    pub principal: Money,
    /// Payment made this period.
    pub payment: Money,
    /// Remaining balance after this period.
    pub balance: Money,
    /// Total amount paid through this period.
    pub cumulative_paid: Money,
}

/// A full period-by-period amortization schedule.
pub type PaymentSchedule = Vec<PaymentRecord>;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Round to the nearest whole currency unit, half away from zero.
///
/// Matches the per-period rounding convention of the reference schedules;
/// banker's rounding would drift from them on exact .5 boundaries.
pub fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
