//! Full rent-vs-buy analysis: toplines, schedule, yearly summary and outcome.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::comparison::assumptions::ScenarioAssumptions;
use crate::comparison::summary::{scenario_summary_with_schedule, SummaryRow};
use crate::error::RentVsBuyError;
use crate::mortgage::{amortization_schedule, total_interest, AmortizationRow};
use crate::ownership::{monthly_cost_breakdown_with_policy, MonthlyCostBreakdown};
use crate::time_value::{within_range, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, ScenarioKind};
use crate::RentVsBuyResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Headline monthly figures and one-time costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toplines {
    pub loan_amount: Money,
    pub down_payment: Money,
    pub closing_costs: Money,
    pub monthly_rent: Money,
    pub monthly_mortgage_payment: Money,
    /// Mortgage plus maintenance, property tax and insurance
    pub monthly_cost_of_buying: MonthlyCostBreakdown,
    /// Twelve months of ownership cost, excluding closing costs
    pub annual_cost_of_buying: Money,
}

/// Where each scenario ends up at the close of the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub final_year: u32,
    pub final_investment_value_buy: Money,
    pub final_investment_value_rent: Money,
    pub final_investment_value_rent_reinvest: Money,
    /// Scenario with the highest final value
    pub best_scenario: ScenarioKind,
    pub best_scenario_label: String,
    /// First year the buyer's equity value reaches the rent + reinvest balance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_breakeven_year: Option<u32>,
}

/// Complete rent-vs-buy analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentVsBuyOutput {
    pub toplines: Toplines,
    pub outcome: ScenarioOutcome,
    pub first_year_cost_of_renting: Money,
    pub final_year_cost_of_renting: Money,
    pub total_interest_paid: Money,
    pub amortization_schedule: Vec<AmortizationRow>,
    pub summary: Vec<SummaryRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full comparison for one set of assumptions.
pub fn analyze_rent_vs_buy(
    assumptions: &ScenarioAssumptions,
) -> RentVsBuyResult<ComputationOutput<RentVsBuyOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    assumptions.validate()?;

    let loan = assumptions.loan();
    let monthly_payment = loan.monthly_payment()?;
    let monthly_cost = monthly_cost_breakdown_with_policy(
        assumptions.home_cost,
        monthly_payment,
        &assumptions.ownership_costs,
    )?;
    let schedule = amortization_schedule(
        loan.loan_amount,
        loan.annual_interest_rate_pct,
        loan.term_years,
        assumptions.down_payment_pct,
        monthly_payment,
    )?;
    let summary = scenario_summary_with_schedule(assumptions, &schedule)?;
    let outcome = scenario_outcome(&summary)?;

    if assumptions.interest_rate_pct.is_zero() && !loan.loan_amount.is_zero() {
        warnings.push("Zero interest rate: the loan is repaid straight-line".into());
    }
    if assumptions.closing_costs() > assumptions.down_payment() {
        warnings.push(format!(
            "Closing costs of {} exceed the down payment of {}",
            assumptions.closing_costs().round_dp(0),
            assumptions.down_payment().round_dp(0)
        ));
    }
    if let Some(row) = summary
        .iter()
        .find(|row| row.investment_value_rent_reinvest < Decimal::ZERO)
    {
        warnings.push(format!(
            "Rent + Re-invest balance turns negative in year {}: renting costs more than \
             buying and the invested down payment is used up",
            row.year
        ));
    }
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let annual_cost_of_buying = within_range(
        monthly_cost.total.checked_mul(Decimal::from(MONTHS_PER_YEAR)),
        "annual cost of buying",
    )?;
    let toplines = Toplines {
        loan_amount: loan.loan_amount,
        down_payment: assumptions.down_payment(),
        closing_costs: assumptions.closing_costs(),
        monthly_rent: assumptions.monthly_rent,
        monthly_mortgage_payment: monthly_payment,
        monthly_cost_of_buying: monthly_cost,
        annual_cost_of_buying,
    };

    let first_year_cost_of_renting = summary
        .first()
        .map(|row| row.annual_cost_of_renting)
        .unwrap_or_default();
    let final_year_cost_of_renting = summary
        .last()
        .map(|row| row.annual_cost_of_renting)
        .unwrap_or_default();

    let output = RentVsBuyOutput {
        toplines,
        outcome,
        first_year_cost_of_renting,
        final_year_cost_of_renting,
        total_interest_paid: total_interest(&schedule)?,
        amortization_schedule: schedule,
        summary,
    };

    tracing::debug!(
        best = %output.outcome.best_scenario,
        breakeven = ?output.outcome.buy_breakeven_year,
        "rent vs buy analysis complete"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Rent vs Buy Projection (fixed-rate amortization, additive inflation)",
        assumptions,
        warnings,
        elapsed,
        output,
    ))
}

/// Final values, winner and breakeven year for a projected summary.
///
/// Ties follow [`ScenarioKind::ALL`]: Buy, then Rent + Re-invest, then Rent.
pub fn scenario_outcome(summary: &[SummaryRow]) -> RentVsBuyResult<ScenarioOutcome> {
    let last = summary.last().ok_or_else(|| RentVsBuyError::InvalidInput {
        field: "summary".into(),
        reason: "Cannot pick a scenario from an empty projection".into(),
    })?;

    let mut best = ScenarioKind::ALL[0];
    for kind in &ScenarioKind::ALL[1..] {
        if last.investment_value(*kind) > last.investment_value(best) {
            best = *kind;
        }
    }

    let buy_breakeven_year = summary
        .iter()
        .find(|row| row.investment_value_buy >= row.investment_value_rent_reinvest)
        .map(|row| row.year);

    Ok(ScenarioOutcome {
        final_year: last.year,
        final_investment_value_buy: last.investment_value_buy,
        final_investment_value_rent: last.investment_value_rent,
        final_investment_value_rent_reinvest: last.investment_value_rent_reinvest,
        best_scenario: best,
        best_scenario_label: best.label().to_string(),
        buy_breakeven_year,
    })
}
