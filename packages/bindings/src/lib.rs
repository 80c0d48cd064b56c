use napi::Result as NapiResult;
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use rent_vs_buy_core::comparison::{self, ScenarioAssumptions};
use rent_vs_buy_core::mortgage::{self, AmortizationInput, AmortizationRow, LoanParameters};
use rent_vs_buy_core::ownership;
use rent_vs_buy_core::sweep::{self, PriceSweepInput};
use rent_vs_buy_core::Money;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PaymentOutput {
    monthly_payment: Money,
}

#[napi]
pub fn monthly_mortgage_payment(input_json: String) -> NapiResult<String> {
    let input: LoanParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let monthly_payment = mortgage::monthly_mortgage_payment(
        input.loan_amount,
        input.annual_interest_rate_pct,
        input.term_years,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&PaymentOutput { monthly_payment }).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: AmortizationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = input.schedule().map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Ownership costs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct MonthlyCostInput {
    home_cost: Money,
    monthly_payment: Money,
    #[serde(default)]
    detail: bool,
}

#[napi]
pub fn monthly_cost_of_buying(input_json: String) -> NapiResult<String> {
    let input: MonthlyCostInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    if input.detail {
        let output = ownership::monthly_cost_breakdown(input.home_cost, input.monthly_payment)
            .map_err(to_napi_error)?;
        return serde_json::to_string(&output).map_err(to_napi_error);
    }
    let total = ownership::monthly_cost_of_buying(input.home_cost, input.monthly_payment)
        .map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "total": total })).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SummaryInput {
    #[serde(default)]
    assumptions: ScenarioAssumptions,
    #[serde(default)]
    amortization_schedule: Option<Vec<AmortizationRow>>,
}

#[napi]
pub fn scenario_summary(input_json: String) -> NapiResult<String> {
    let input: SummaryInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = match input.amortization_schedule {
        Some(ref schedule) => {
            comparison::scenario_summary_with_schedule(&input.assumptions, schedule)
        }
        None => comparison::scenario_summary(&input.assumptions),
    }
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_rent_vs_buy(input_json: String) -> NapiResult<String> {
    let input: ScenarioAssumptions = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = comparison::analyze_rent_vs_buy(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn default_assumptions() -> NapiResult<String> {
    serde_json::to_string(&ScenarioAssumptions::default()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Price sweep
// ---------------------------------------------------------------------------

#[napi]
pub fn sweep_home_price(input_json: String) -> NapiResult<String> {
    let input: PriceSweepInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sweep::sweep_home_price(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
