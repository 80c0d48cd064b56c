//! Recurring monthly cost of owning a home.
//!
//! Ownership costs on top of the mortgage are a maintenance reserve, a
//! property-tax proxy (calibrated to a single reference locality, not a
//! general-purpose rate) and a flat homeowners-insurance premium.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RentVsBuyError;
use crate::time_value::{pct_to_rate, within_range, MONTHS_PER_YEAR};
use crate::types::{Money, Percent};
use crate::RentVsBuyResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Annual maintenance reserve as a percentage of home cost
pub const MAINTENANCE_RESERVE_PCT: Percent = dec!(1);
/// Annual property tax as a percentage of home cost
pub const PROPERTY_TAX_PCT: Percent = dec!(0.9);
/// Flat monthly homeowners insurance premium
pub const HOMEOWNERS_INSURANCE_MONTHLY: Money = dec!(200);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Rates applied on top of the mortgage payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipCostPolicy {
    pub maintenance_reserve_pct: Percent,
    pub property_tax_pct: Percent,
    pub homeowners_insurance_monthly: Money,
}

impl Default for OwnershipCostPolicy {
    fn default() -> Self {
        Self {
            maintenance_reserve_pct: MAINTENANCE_RESERVE_PCT,
            property_tax_pct: PROPERTY_TAX_PCT,
            homeowners_insurance_monthly: HOMEOWNERS_INSURANCE_MONTHLY,
        }
    }
}

/// Monthly cost of buying, itemised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostBreakdown {
    pub mortgage_payment: Money,
    pub maintenance: Money,
    pub property_tax: Money,
    pub homeowners_insurance: Money,
    pub total: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Total monthly cost of owning: mortgage payment plus ownership costs.
pub fn monthly_cost_of_buying(home_cost: Money, monthly_payment: Money) -> RentVsBuyResult<Money> {
    Ok(monthly_cost_breakdown(home_cost, monthly_payment)?.total)
}

/// Monthly cost of owning with each component reported separately.
pub fn monthly_cost_breakdown(
    home_cost: Money,
    monthly_payment: Money,
) -> RentVsBuyResult<MonthlyCostBreakdown> {
    monthly_cost_breakdown_with_policy(home_cost, monthly_payment, &OwnershipCostPolicy::default())
}

/// Monthly cost of owning under a caller-supplied cost policy.
pub fn monthly_cost_breakdown_with_policy(
    home_cost: Money,
    monthly_payment: Money,
    policy: &OwnershipCostPolicy,
) -> RentVsBuyResult<MonthlyCostBreakdown> {
    if home_cost < Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "home_cost".into(),
            reason: "Home cost cannot be negative".into(),
        });
    }
    if monthly_payment < Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment cannot be negative".into(),
        });
    }
    validate_policy(policy)?;

    let months = Decimal::from(MONTHS_PER_YEAR);
    let monthly_share = |pct: Percent, what: &str| {
        within_range(
            home_cost
                .checked_mul(pct_to_rate(pct))
                .and_then(|annual| annual.checked_div(months)),
            what,
        )
    };
    let maintenance = monthly_share(policy.maintenance_reserve_pct, "maintenance")?;
    let property_tax = monthly_share(policy.property_tax_pct, "property tax")?;
    let homeowners_insurance = policy.homeowners_insurance_monthly;
    let total = within_range(
        monthly_payment
            .checked_add(maintenance)
            .and_then(|v| v.checked_add(property_tax))
            .and_then(|v| v.checked_add(homeowners_insurance)),
        "monthly cost of buying",
    )?;

    Ok(MonthlyCostBreakdown {
        mortgage_payment: monthly_payment,
        maintenance,
        property_tax,
        homeowners_insurance,
        total,
    })
}

fn validate_policy(policy: &OwnershipCostPolicy) -> RentVsBuyResult<()> {
    let checks = [
        ("maintenance_reserve_pct", policy.maintenance_reserve_pct),
        ("property_tax_pct", policy.property_tax_pct),
        ("homeowners_insurance_monthly", policy.homeowners_insurance_monthly),
    ];
    for (field, value) in checks {
        if value < Decimal::ZERO {
            return Err(RentVsBuyError::InvalidInput {
                field: field.into(),
                reason: "Ownership costs cannot be negative".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_components() {
        let breakdown = monthly_cost_breakdown(dec!(1200000), dec!(5000)).unwrap();
        assert_eq!(
            breakdown,
            MonthlyCostBreakdown {
                mortgage_payment: dec!(5000),
                maintenance: dec!(1000),
                property_tax: dec!(900),
                homeowners_insurance: dec!(200),
                total: dec!(7100),
            }
        );
    }

    #[test]
    fn test_total_matches_breakdown() {
        let total = monthly_cost_of_buying(dec!(800000), dec!(4257.94)).unwrap();
        let breakdown = monthly_cost_breakdown(dec!(800000), dec!(4257.94)).unwrap();
        assert_eq!(total, breakdown.total);
        // 4257.94 + 666.67 + 600 + 200
        assert!((total - dec!(5724.60)).abs() < dec!(0.01));
    }

    #[test]
    fn test_paid_off_home_still_has_costs() {
        let total = monthly_cost_of_buying(dec!(120000), Decimal::ZERO).unwrap();
        assert_eq!(total, dec!(390));
    }

    #[test]
    fn test_custom_policy() {
        let policy = OwnershipCostPolicy {
            maintenance_reserve_pct: dec!(2),
            property_tax_pct: dec!(1.2),
            homeowners_insurance_monthly: dec!(150),
        };
        let breakdown =
            monthly_cost_breakdown_with_policy(dec!(600000), dec!(3000), &policy).unwrap();
        assert_eq!(breakdown.maintenance, dec!(1000));
        assert_eq!(breakdown.property_tax, dec!(600));
        assert_eq!(breakdown.total, dec!(4750));
    }

    #[test]
    fn test_default_policy_uses_constants() {
        let policy = OwnershipCostPolicy::default();
        assert_eq!(policy.maintenance_reserve_pct, MAINTENANCE_RESERVE_PCT);
        assert_eq!(policy.property_tax_pct, PROPERTY_TAX_PCT);
        assert_eq!(policy.homeowners_insurance_monthly, HOMEOWNERS_INSURANCE_MONTHLY);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(monthly_cost_of_buying(dec!(-1), dec!(100)).is_err());
        assert!(monthly_cost_of_buying(dec!(100000), dec!(-1)).is_err());
        let policy = OwnershipCostPolicy {
            property_tax_pct: dec!(-0.1),
            ..OwnershipCostPolicy::default()
        };
        assert!(monthly_cost_breakdown_with_policy(dec!(1), dec!(1), &policy).is_err());
    }

    #[test]
    fn test_out_of_range_cost_is_an_error() {
        let policy = OwnershipCostPolicy {
            property_tax_pct: dec!(5000),
            ..OwnershipCostPolicy::default()
        };
        let err = monthly_cost_breakdown_with_policy(
            dec!(10000000000000000000000000000),
            Decimal::ZERO,
            &policy,
        )
        .unwrap_err();
        assert!(matches!(err, RentVsBuyError::FinancialImpossibility(_)), "{err}");
    }
}
