use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use rent_vs_buy_core::mortgage::{amortization_schedule, total_interest, LoanParameters};

use super::assumptions::{AssumptionArgs, YearRangeArgs};

/// Arguments for the monthly mortgage payment
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub scenario: AssumptionArgs,

    /// Loan principal; defaults to the price less the down payment
    #[arg(long)]
    pub loan_amount: Option<Decimal>,
}

/// Arguments for the monthly amortization schedule
#[derive(Args)]
pub struct AmortizationArgs {
    #[command(flatten)]
    pub scenario: AssumptionArgs,

    #[command(flatten)]
    pub years: YearRangeArgs,

    /// Monthly payment to amortize with; defaults to the computed payment
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,
}

fn loan_for(
    scenario: &AssumptionArgs,
    loan_amount: Option<Decimal>,
) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    let mut loan = scenario.resolve()?.loan();
    if let Some(amount) = loan_amount {
        loan.loan_amount = amount;
    }
    Ok(loan)
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = loan_for(&args.scenario, args.loan_amount)?;
    let monthly_payment = loan.monthly_payment()?;
    Ok(json!({
        "loan_amount": loan.loan_amount,
        "annual_interest_rate_pct": loan.annual_interest_rate_pct,
        "term_years": loan.term_years,
        "number_of_payments": loan.number_of_payments(),
        "monthly_payment": monthly_payment.round_dp(2),
    }))
}

pub fn run_amortization(args: AmortizationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    args.years.validate()?;
    let assumptions = args.scenario.resolve()?;
    let loan = assumptions.loan();
    let monthly_payment = match args.monthly_payment {
        Some(payment) => payment,
        None => loan.monthly_payment()?,
    };
    let schedule = amortization_schedule(
        loan.loan_amount,
        loan.annual_interest_rate_pct,
        loan.term_years,
        assumptions.down_payment_pct,
        monthly_payment,
    )?;
    let interest = total_interest(&schedule)?;
    tracing::info!(
        rows = schedule.len(),
        total_interest = %interest.round_dp(2),
        "amortization schedule built"
    );

    let rows = args.years.filter(schedule, |row| row.year);
    Ok(serde_json::to_value(rows)?)
}
