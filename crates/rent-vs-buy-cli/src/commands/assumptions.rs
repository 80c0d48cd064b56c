use clap::Args;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use rent_vs_buy_core::comparison::ScenarioAssumptions;

use crate::input;

/// Scenario assumptions shared by every projection command.
///
/// Values come from `--input`, else JSON piped on stdin, else the defaults;
/// any flag given explicitly then overrides that value.
#[derive(Args, Debug, Default)]
#[command(allow_hyphen_values = true)]
pub struct AssumptionArgs {
    /// Path to a JSON or YAML file of scenario assumptions
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the home
    #[arg(long)]
    pub home_cost: Option<Decimal>,

    /// Down payment as a percentage of the price (e.g. 20)
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Annual mortgage interest rate in percent (e.g. 7.0)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Mortgage term in years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Closing costs as a percentage of the price
    #[arg(long)]
    pub closing_costs: Option<Decimal>,

    /// Real annual home appreciation in percent, before inflation
    #[arg(long)]
    pub home_appreciation: Option<Decimal>,

    /// Annual inflation in percent, added to every growth rate
    #[arg(long)]
    pub inflation: Option<Decimal>,

    /// Real annual investment growth in percent, before inflation
    #[arg(long)]
    pub investment_growth: Option<Decimal>,

    /// Monthly rent at the start of the horizon
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,

    /// Real annual rent increase in percent, before inflation
    #[arg(long)]
    pub rent_increase: Option<Decimal>,

    /// Annual maintenance reserve as a percentage of the price
    #[arg(long)]
    pub maintenance_pct: Option<Decimal>,

    /// Annual property tax as a percentage of the price
    #[arg(long)]
    pub property_tax_pct: Option<Decimal>,

    /// Monthly homeowner's insurance premium
    #[arg(long)]
    pub homeowners_insurance: Option<Decimal>,
}

impl AssumptionArgs {
    /// Resolve the assumptions from file, stdin or defaults, then apply flags.
    pub fn resolve(&self) -> Result<ScenarioAssumptions, Box<dyn std::error::Error>> {
        let mut assumptions: ScenarioAssumptions = read_or_default(self.input.as_deref())?;
        self.apply_overrides(&mut assumptions);
        tracing::debug!(?assumptions, "resolved scenario assumptions");
        Ok(assumptions)
    }

    fn apply_overrides(&self, a: &mut ScenarioAssumptions) {
        let overrides = [
            (self.home_cost, &mut a.home_cost),
            (self.down_payment, &mut a.down_payment_pct),
            (self.interest_rate, &mut a.interest_rate_pct),
            (self.closing_costs, &mut a.closing_costs_pct),
            (self.home_appreciation, &mut a.home_appreciation_pct),
            (self.inflation, &mut a.inflation_pct),
            (self.investment_growth, &mut a.investment_growth_pct),
            (self.monthly_rent, &mut a.monthly_rent),
            (self.rent_increase, &mut a.rent_increase_pct),
            (
                self.maintenance_pct,
                &mut a.ownership_costs.maintenance_reserve_pct,
            ),
            (self.property_tax_pct, &mut a.ownership_costs.property_tax_pct),
            (
                self.homeowners_insurance,
                &mut a.ownership_costs.homeowners_insurance_monthly,
            ),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value;
            }
        }
        if let Some(term_years) = self.term_years {
            a.term_years = term_years;
        }
    }
}

/// Inclusive year window applied to yearly output rows.
#[derive(Args, Debug, Default)]
pub struct YearRangeArgs {
    /// First year to include
    #[arg(long)]
    pub from_year: Option<u32>,

    /// Last year to include
    #[arg(long)]
    pub to_year: Option<u32>,
}

impl YearRangeArgs {
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let (Some(from), Some(to)) = (self.from_year, self.to_year) {
            if from > to {
                return Err(format!("--from-year {from} is after --to-year {to}").into());
            }
        }
        Ok(())
    }

    pub fn contains(&self, year: u32) -> bool {
        self.from_year.map_or(true, |from| year >= from)
            && self.to_year.map_or(true, |to| year <= to)
    }

    /// Keep the rows whose year falls in the window.
    pub fn filter<T>(&self, rows: Vec<T>, year_of: impl Fn(&T) -> u32) -> Vec<T> {
        rows.into_iter().filter(|row| self.contains(year_of(row))).collect()
    }
}

/// Read a typed value from `path`, else from piped stdin, else use `T::default()`.
pub fn read_or_default<T>(path: Option<&str>) -> Result<T, Box<dyn std::error::Error>>
where
    T: DeserializeOwned + Default,
{
    if let Some(path) = path {
        input::file::read_input(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Ok(T::default())
    }
}

/// Default assumptions, for use as a starting `--input` file.
pub fn run_defaults() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(ScenarioAssumptions::default())?)
}
