//! Year-by-year comparison of the buy, rent, and rent + reinvest scenarios.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::comparison::assumptions::ScenarioAssumptions;
use crate::error::RentVsBuyError;
use crate::mortgage::{amortization_schedule, monthly_mortgage_payment, AmortizationRow};
use crate::ownership::monthly_cost_breakdown_with_policy;
use crate::time_value::{growth_factor, pct_to_rate, round_whole, within_range, MONTHS_PER_YEAR};
use crate::types::{Money, Percent, ScenarioKind};
use crate::RentVsBuyResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One projection year. Every field is rounded to a whole unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub year: u32,
    /// Ownership costs for the year, closing costs included in year 1
    pub annual_cost_of_buying: Money,
    /// Share of the home owned at the end of the year
    pub equity_in_home_pct: Percent,
    /// Appreciated home value
    pub home_value: Money,
    /// Buy scenario: owned share of the appreciated home
    pub investment_value_buy: Money,
    pub annual_cost_of_renting: Money,
    /// Buying cost less renting cost; negative when renting is dearer
    pub cost_savings: Money,
    /// Rent scenario: the unspent down payment, invested
    pub investment_value_rent: Money,
    /// Rent + reinvest scenario: running balance including each year's savings
    pub investment_value_rent_reinvest: Money,
}

impl SummaryRow {
    /// Wealth held at the end of this year under `kind`.
    pub fn investment_value(&self, kind: ScenarioKind) -> Money {
        match kind {
            ScenarioKind::Buy => self.investment_value_buy,
            ScenarioKind::Rent => self.investment_value_rent,
            ScenarioKind::RentReinvest => self.investment_value_rent_reinvest,
        }
    }
}

/// Running balance of the rent + reinvest scenario.
///
/// Unlike the other summary fields this depends on the previous year, so it
/// is carried from one year to the next rather than computed from `year`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReinvestBalance(Money);

impl ReinvestBalance {
    /// Balance before year 1: the down payment the renter kept.
    pub fn seed(down_payment: Money) -> Self {
        Self(down_payment)
    }

    /// Grow the balance for one year, then add that year's cost difference,
    /// positive or negative.
    pub fn roll_forward(
        self,
        annual_growth: Decimal,
        cost_savings: Money,
    ) -> RentVsBuyResult<Self> {
        let balance = within_range(
            self.0
                .checked_mul(annual_growth)
                .and_then(|grown| grown.checked_add(cost_savings)),
            "rent + reinvest balance",
        )?;
        Ok(Self(balance))
    }

    pub fn value(self) -> Money {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project the three scenarios, deriving the amortization schedule from the
/// assumptions.
pub fn scenario_summary(assumptions: &ScenarioAssumptions) -> RentVsBuyResult<Vec<SummaryRow>> {
    assumptions.validate()?;
    let loan = assumptions.loan();
    let monthly_payment = loan.monthly_payment()?;
    let schedule = amortization_schedule(
        loan.loan_amount,
        loan.annual_interest_rate_pct,
        loan.term_years,
        assumptions.down_payment_pct,
        monthly_payment,
    )?;
    summarize(assumptions, monthly_payment, &schedule)
}

/// Project the three scenarios against a schedule the caller already built.
///
/// The schedule must contain at least one row for every year of the term.
pub fn scenario_summary_with_schedule(
    assumptions: &ScenarioAssumptions,
    schedule: &[AmortizationRow],
) -> RentVsBuyResult<Vec<SummaryRow>> {
    assumptions.validate()?;
    let monthly_payment = monthly_mortgage_payment(
        assumptions.loan_amount(),
        assumptions.interest_rate_pct,
        assumptions.term_years,
    )?;
    summarize(assumptions, monthly_payment, schedule)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

fn summarize(
    a: &ScenarioAssumptions,
    monthly_payment: Money,
    schedule: &[AmortizationRow],
) -> RentVsBuyResult<Vec<SummaryRow>> {
    tracing::debug!(
        home_cost = %a.home_cost,
        term_years = a.term_years,
        schedule_rows = schedule.len(),
        "projecting rent vs buy scenarios"
    );

    let equity_by_year = year_end_equity(schedule, a.term_years)?;
    let monthly_cost =
        monthly_cost_breakdown_with_policy(a.home_cost, monthly_payment, &a.ownership_costs)?;
    let months = Decimal::from(MONTHS_PER_YEAR);
    let recurring_cost_of_buying =
        within_range(monthly_cost.total.checked_mul(months), "annual cost of buying")?;
    let annual_rent = within_range(a.monthly_rent.checked_mul(months), "annual rent")?;
    let down_payment = a.down_payment();
    let annual_investment_growth = growth_factor(a.investment_growth_pct, a.inflation_pct, 1)?;

    let mut rows = Vec::with_capacity(a.term_years as usize);
    let mut reinvest = ReinvestBalance::seed(down_payment);

    for (year, equity_pct) in (1..=a.term_years).zip(equity_by_year) {
        let home_value = within_range(
            a.home_cost
                .checked_mul(growth_factor(a.home_appreciation_pct, a.inflation_pct, year)?),
            "home value",
        )?;
        let investment_value_buy = within_range(
            pct_to_rate(equity_pct).checked_mul(home_value),
            "buy investment value",
        )?;

        let mut annual_cost_of_buying = recurring_cost_of_buying;
        if year == 1 {
            annual_cost_of_buying = within_range(
                annual_cost_of_buying.checked_add(a.closing_costs()),
                "annual cost of buying",
            )?;
        }

        let investment_value_rent = within_range(
            down_payment
                .checked_mul(growth_factor(a.investment_growth_pct, a.inflation_pct, year)?),
            "rent investment value",
        )?;
        let annual_cost_of_renting = within_range(
            annual_rent.checked_mul(growth_factor(a.rent_increase_pct, a.inflation_pct, year)?),
            "annual cost of renting",
        )?;
        let cost_savings = within_range(
            annual_cost_of_buying.checked_sub(annual_cost_of_renting),
            "cost savings",
        )?;

        reinvest = reinvest.roll_forward(annual_investment_growth, cost_savings)?;

        rows.push(SummaryRow {
            year,
            annual_cost_of_buying: round_whole(annual_cost_of_buying),
            equity_in_home_pct: round_whole(equity_pct),
            home_value: round_whole(home_value),
            investment_value_buy: round_whole(investment_value_buy),
            annual_cost_of_renting: round_whole(annual_cost_of_renting),
            cost_savings: round_whole(cost_savings),
            investment_value_rent: round_whole(investment_value_rent),
            investment_value_rent_reinvest: round_whole(reinvest.value()),
        });
    }

    Ok(rows)
}

/// Equity at the last payment of each year 1..=term_years.
fn year_end_equity(schedule: &[AmortizationRow], term_years: u32) -> RentVsBuyResult<Vec<Percent>> {
    let mut last_by_year: BTreeMap<u32, &AmortizationRow> = BTreeMap::new();
    for row in schedule {
        last_by_year
            .entry(row.year)
            .and_modify(|current| {
                if row.payment_number > current.payment_number {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    (1..=term_years)
        .map(|year| {
            last_by_year
                .get(&year)
                .map(|row| row.equity_pct)
                .ok_or(RentVsBuyError::InconsistentSchedule {
                    term_years,
                    missing_year: year,
                })
        })
        .collect()
}
