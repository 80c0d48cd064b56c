//! Sweep the home price across a range and compare outcomes at each price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::comparison::{scenario_outcome, scenario_summary, ScenarioAssumptions};
use crate::error::RentVsBuyError;
use crate::ownership::monthly_cost_breakdown_with_policy;
use crate::types::{with_metadata, ComputationOutput, Money, ScenarioKind};
use crate::RentVsBuyResult;

/// Upper bound on the number of prices evaluated in one sweep
pub const MAX_SWEEP_POINTS: usize = 1000;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for a home price sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSweepInput {
    /// Assumptions shared by every point; `home_cost` is replaced per point
    #[serde(default)]
    pub base: ScenarioAssumptions,
    pub min_home_cost: Money,
    pub max_home_cost: Money,
    pub step: Money,
}

/// Outcome at a single home price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSweepPoint {
    pub home_cost: Money,
    pub monthly_mortgage_payment: Money,
    pub monthly_cost_of_buying: Money,
    pub final_investment_value_buy: Money,
    pub final_investment_value_rent: Money,
    pub final_investment_value_rent_reinvest: Money,
    pub best_scenario: ScenarioKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_breakeven_year: Option<u32>,
}

/// Output of a home price sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSweepOutput {
    pub points: Vec<PriceSweepPoint>,
    /// Cheapest swept price at which buying ends up ahead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest_price_where_buying_wins: Option<Money>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full projection at every price from min to max in `step` increments.
pub fn sweep_home_price(
    input: &PriceSweepInput,
) -> RentVsBuyResult<ComputationOutput<PriceSweepOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let prices = generate_sweep_values(input)?;
    let mut points = Vec::with_capacity(prices.len());

    for home_cost in prices {
        let assumptions = ScenarioAssumptions {
            home_cost,
            ..input.base.clone()
        };
        let summary = scenario_summary(&assumptions)?;
        let outcome = scenario_outcome(&summary)?;
        let monthly_mortgage_payment = assumptions.loan().monthly_payment()?;
        let monthly_cost = monthly_cost_breakdown_with_policy(
            home_cost,
            monthly_mortgage_payment,
            &assumptions.ownership_costs,
        )?;

        points.push(PriceSweepPoint {
            home_cost,
            monthly_mortgage_payment,
            monthly_cost_of_buying: monthly_cost.total,
            final_investment_value_buy: outcome.final_investment_value_buy,
            final_investment_value_rent: outcome.final_investment_value_rent,
            final_investment_value_rent_reinvest: outcome.final_investment_value_rent_reinvest,
            best_scenario: outcome.best_scenario,
            buy_breakeven_year: outcome.buy_breakeven_year,
        });
    }

    let cheapest_price_where_buying_wins = points
        .iter()
        .find(|p| p.best_scenario == ScenarioKind::Buy)
        .map(|p| p.home_cost);
    if cheapest_price_where_buying_wins.is_none() {
        warnings.push("Buying does not come out ahead at any swept price".into());
    }
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    tracing::debug!(points = points.len(), "home price sweep complete");

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Home Price Sweep (full projection per price)",
        &serde_json::json!({
            "min_home_cost": input.min_home_cost.to_string(),
            "max_home_cost": input.max_home_cost.to_string(),
            "step": input.step.to_string(),
            "base": input.base,
        }),
        warnings,
        elapsed,
        PriceSweepOutput {
            points,
            cheapest_price_where_buying_wins,
        },
    ))
}

/// Prices from min to max by step; max is always included.
fn generate_sweep_values(input: &PriceSweepInput) -> RentVsBuyResult<Vec<Money>> {
    if input.step <= Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "step".into(),
            reason: "Step must be positive".into(),
        });
    }
    if input.min_home_cost < Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "min_home_cost".into(),
            reason: "Home cost cannot be negative".into(),
        });
    }
    if input.min_home_cost > input.max_home_cost {
        return Err(RentVsBuyError::InvalidInput {
            field: "min_home_cost".into(),
            reason: "Min must be <= max".into(),
        });
    }

    // Stepped prices plus the max when it falls between steps
    let point_count = (input.max_home_cost - input.min_home_cost)
        .checked_div(input.step)
        .map(|span| span.ceil() + Decimal::ONE);
    if point_count.map_or(true, |count| count > Decimal::from(MAX_SWEEP_POINTS as u64)) {
        return Err(RentVsBuyError::InvalidInput {
            field: "step".into(),
            reason: format!("Sweep would evaluate more than {MAX_SWEEP_POINTS} prices"),
        });
    }

    let mut values = Vec::new();
    let mut current = Some(input.min_home_cost);
    while let Some(price) = current.filter(|price| *price <= input.max_home_cost) {
        values.push(price);
        current = price.checked_add(input.step);
    }
    if let Some(&last) = values.last() {
        if last < input.max_home_cost {
            values.push(input.max_home_cost);
        }
    }

    Ok(values)
}
