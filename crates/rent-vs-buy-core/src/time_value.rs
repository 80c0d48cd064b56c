use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

use crate::error::RentVsBuyError;
use crate::types::{Money, Percent, Rate};
use crate::RentVsBuyResult;

pub const MONTHS_PER_YEAR: u32 = 12;

const PCT_DIVISOR: Decimal = dec!(100);

/// Convert a quoted percentage (5 = 5%) to a decimal rate (0.05).
pub fn pct_to_rate(pct: Percent) -> Rate {
    pct / PCT_DIVISOR
}

/// Monthly periodic rate for an annual percentage: pct / 100 / 12.
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    pct_to_rate(annual_pct) / Decimal::from(MONTHS_PER_YEAR)
}

/// Nominal annual rate for a rate quoted "after inflation".
///
/// Inflation is layered on additively, not compounded: 1% real growth with
/// 3% inflation grows at 4% a year, never at 1.01 * 1.03 - 1.
pub fn combined_rate_pct(real_pct: Percent, inflation_pct: Percent) -> Percent {
    real_pct + inflation_pct
}

/// (1 + rate)^periods, failing instead of overflowing the decimal range.
pub fn compound(rate: Rate, periods: u32) -> RentVsBuyResult<Decimal> {
    let base = Decimal::ONE + rate;
    base.checked_powi(i64::from(periods)).ok_or_else(|| {
        RentVsBuyError::FinancialImpossibility(format!(
            "compounding {base} over {periods} periods overflows decimal precision"
        ))
    })
}

/// Unwrap a checked decimal operation, failing instead of panicking when the
/// result leaves the representable range.
pub fn within_range(value: Option<Decimal>, what: &str) -> RentVsBuyResult<Decimal> {
    value.ok_or_else(|| {
        RentVsBuyError::FinancialImpossibility(format!("{what} overflows decimal precision"))
    })
}

/// Growth multiple after `years` at `real_pct` plus `inflation_pct` a year.
pub fn growth_factor(
    real_pct: Percent,
    inflation_pct: Percent,
    years: u32,
) -> RentVsBuyResult<Decimal> {
    let rate = pct_to_rate(combined_rate_pct(real_pct, inflation_pct));
    if rate <= dec!(-1) {
        return Err(RentVsBuyError::InvalidInput {
            field: "growth_rate".into(),
            reason: format!(
                "Combined growth of {}% wipes out the balance; must be greater than -100%",
                real_pct + inflation_pct
            ),
        });
    }
    compound(rate, years)
}

/// Round to the nearest whole currency unit, ties to even.
pub fn round_whole(value: Money) -> Money {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .normalize()
}

/// Round a percentage to two decimal places, ties to even.
pub fn round_pct(value: Percent) -> Percent {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .normalize()
}
