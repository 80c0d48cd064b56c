use clap::Args;
use serde_json::Value;

use rent_vs_buy_core::comparison::{
    analyze_rent_vs_buy, scenario_summary, scenario_summary_with_schedule,
};
use rent_vs_buy_core::mortgage::AmortizationRow;

use super::assumptions::{AssumptionArgs, YearRangeArgs};
use crate::input;

/// Arguments for the year-by-year scenario summary
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub scenario: AssumptionArgs,

    #[command(flatten)]
    pub years: YearRangeArgs,

    /// JSON or YAML amortization schedule to project against instead of the
    /// one derived from the assumptions
    #[arg(long)]
    pub schedule: Option<String>,
}

/// Arguments for the full rent vs buy comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub scenario: AssumptionArgs,
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    args.years.validate()?;
    let assumptions = args.scenario.resolve()?;
    let summary = match args.schedule {
        Some(ref path) => {
            let schedule: Vec<AmortizationRow> = input::file::read_input(path)?;
            scenario_summary_with_schedule(&assumptions, &schedule)?
        }
        None => scenario_summary(&assumptions)?,
    };
    let rows = args.years.filter(summary, |row| row.year);
    Ok(serde_json::to_value(rows)?)
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let assumptions = args.scenario.resolve()?;
    let result = analyze_rent_vs_buy(&assumptions)?;
    tracing::info!(
        best = %result.result.outcome.best_scenario_label,
        elapsed_us = result.metadata.computation_time_us,
        "comparison complete"
    );
    Ok(serde_json::to_value(result)?)
}
