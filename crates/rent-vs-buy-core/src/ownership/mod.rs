pub mod costs;

pub use costs::{
    monthly_cost_breakdown, monthly_cost_breakdown_with_policy, monthly_cost_of_buying,
    MonthlyCostBreakdown, OwnershipCostPolicy, HOMEOWNERS_INSURANCE_MONTHLY,
    MAINTENANCE_RESERVE_PCT, PROPERTY_TAX_PCT,
};
