use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use rent_vs_buy_core::ownership::monthly_cost_breakdown_with_policy;

use super::assumptions::AssumptionArgs;

/// Arguments for the monthly cost of owning
#[derive(Args)]
pub struct MonthlyCostArgs {
    #[command(flatten)]
    pub scenario: AssumptionArgs,

    /// Monthly mortgage payment; defaults to the computed payment
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,

    /// Show each component instead of the total alone
    #[arg(long)]
    pub detail: bool,
}

pub fn run_monthly_cost(args: MonthlyCostArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let assumptions = args.scenario.resolve()?;
    let monthly_payment = match args.monthly_payment {
        Some(payment) => payment,
        None => assumptions.loan().monthly_payment()?,
    };
    let breakdown = monthly_cost_breakdown_with_policy(
        assumptions.home_cost,
        monthly_payment,
        &assumptions.ownership_costs,
    )?;

    if args.detail {
        Ok(serde_json::to_value(breakdown)?)
    } else {
        Ok(json!({ "total": breakdown.total }))
    }
}
