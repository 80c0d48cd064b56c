use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use rent_vs_buy_core::sweep::{sweep_home_price, PriceSweepInput};

use super::assumptions::AssumptionArgs;

/// Arguments for a home price sweep
#[derive(Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub scenario: AssumptionArgs,

    /// Lowest home price to evaluate
    #[arg(long)]
    pub min_home_cost: Decimal,

    /// Highest home price to evaluate
    #[arg(long)]
    pub max_home_cost: Decimal,

    /// Price increment between points
    #[arg(long)]
    pub step: Decimal,
}

pub fn run_sweep(args: SweepArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = PriceSweepInput {
        base: args.scenario.resolve()?,
        min_home_cost: args.min_home_cost,
        max_home_cost: args.max_home_cost,
        step: args.step,
    };
    let result = sweep_home_price(&input)?;
    tracing::info!(
        points = result.result.points.len(),
        elapsed_us = result.metadata.computation_time_us,
        "sweep complete"
    );
    Ok(serde_json::to_value(result)?)
}
