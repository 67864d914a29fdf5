pub mod schedule;
pub mod solvers;
pub mod words;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Convert an annual percentage rate into a monthly periodic rate.
///
/// Flag inputs follow the calculator convention: rates are annual
/// percentages, tenors are years plus months.
pub(crate) fn monthly_rate(annual_rate_pct: Decimal) -> Decimal {
    annual_rate_pct / dec!(12) / dec!(100)
}

/// Combine year and month flags into a total month count.
pub(crate) fn total_months(
    years: Option<u32>,
    months: Option<u32>,
) -> Result<u32, Box<dyn std::error::Error>> {
    let total = years
        .unwrap_or(0)
        .checked_mul(12)
        .and_then(|y| y.checked_add(months.unwrap_or(0)))
        .ok_or("tenure too large: --years/--months overflow the month counter")?;
    if total == 0 {
        return Err("tenure must be positive: provide --years and/or --months".into());
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_months_combines_years_and_months() {
        assert_eq!(total_months(Some(2), Some(3)).unwrap(), 27);
        assert_eq!(total_months(None, Some(6)).unwrap(), 6);
        assert_eq!(total_months(Some(1), None).unwrap(), 12);
    }

    #[test]
    fn test_total_months_rejects_zero_tenure() {
        assert!(total_months(None, None).is_err());
        assert!(total_months(Some(0), Some(0)).is_err());
    }

    #[test]
    fn test_total_months_rejects_overflowing_tenure() {
        assert!(total_months(Some(u32::MAX), None).is_err());
        assert!(total_months(Some(u32::MAX / 12), Some(u32::MAX)).is_err());
    }

    #[test]
    fn test_monthly_rate_conversion() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
    }
}
