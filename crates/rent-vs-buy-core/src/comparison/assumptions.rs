use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RentVsBuyError;
use crate::mortgage::{LoanParameters, MAX_TERM_YEARS};
use crate::ownership::OwnershipCostPolicy;
use crate::time_value::pct_to_rate;
use crate::types::{Money, Percent};
use crate::RentVsBuyResult;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_HOME_COST: Money = dec!(800000);
pub const DEFAULT_INTEREST_RATE_PCT: Percent = dec!(7.0);
pub const DEFAULT_DOWN_PAYMENT_PCT: Percent = dec!(20);
pub const DEFAULT_CLOSING_COSTS_PCT: Percent = dec!(3.0);
pub const DEFAULT_MONTHLY_RENT: Money = dec!(2500);
pub const DEFAULT_RENT_INCREASE_PCT: Percent = dec!(1.0);
pub const DEFAULT_INFLATION_PCT: Percent = dec!(3.0);
pub const DEFAULT_HOME_APPRECIATION_PCT: Percent = dec!(1.0);
pub const DEFAULT_INVESTMENT_GROWTH_PCT: Percent = dec!(7.0);
pub const DEFAULT_TERM_YEARS: u32 = 30;

const MAX_PCT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything needed to compare buying a home with renting one.
///
/// Appreciation, investment growth and rent increases are quoted "after
/// inflation"; inflation is added to each of them before compounding.
/// Omitted fields take the `DEFAULT_*` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioAssumptions {
    /// Purchase price of the home
    pub home_cost: Money,
    /// Down payment as a percentage of the purchase price
    pub down_payment_pct: Percent,
    /// Annual mortgage interest rate
    pub interest_rate_pct: Percent,
    /// Mortgage term; also the projection horizon
    pub term_years: u32,
    /// One-time purchase costs as a percentage of the price, paid in year 1
    pub closing_costs_pct: Percent,
    /// Annual home price appreciation after inflation
    pub home_appreciation_pct: Percent,
    /// Annual inflation
    pub inflation_pct: Percent,
    /// Annual investment return after inflation
    pub investment_growth_pct: Percent,
    /// Current monthly rent for an equivalent home
    pub monthly_rent: Money,
    /// Annual rent increase after inflation
    pub rent_increase_pct: Percent,
    /// Recurring ownership costs on top of the mortgage
    pub ownership_costs: OwnershipCostPolicy,
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self {
            home_cost: DEFAULT_HOME_COST,
            down_payment_pct: DEFAULT_DOWN_PAYMENT_PCT,
            interest_rate_pct: DEFAULT_INTEREST_RATE_PCT,
            term_years: DEFAULT_TERM_YEARS,
            closing_costs_pct: DEFAULT_CLOSING_COSTS_PCT,
            home_appreciation_pct: DEFAULT_HOME_APPRECIATION_PCT,
            inflation_pct: DEFAULT_INFLATION_PCT,
            investment_growth_pct: DEFAULT_INVESTMENT_GROWTH_PCT,
            monthly_rent: DEFAULT_MONTHLY_RENT,
            rent_increase_pct: DEFAULT_RENT_INCREASE_PCT,
            ownership_costs: OwnershipCostPolicy::default(),
        }
    }
}

impl ScenarioAssumptions {
    /// Cash put down at purchase; also the renter's starting investment.
    pub fn down_payment(&self) -> Money {
        self.home_cost * pct_to_rate(self.down_payment_pct)
    }

    /// Amount borrowed: home cost less down payment.
    pub fn loan_amount(&self) -> Money {
        self.home_cost * (Decimal::ONE - pct_to_rate(self.down_payment_pct))
    }

    pub fn closing_costs(&self) -> Money {
        self.home_cost * pct_to_rate(self.closing_costs_pct)
    }

    pub fn loan(&self) -> LoanParameters {
        LoanParameters {
            loan_amount: self.loan_amount(),
            annual_interest_rate_pct: self.interest_rate_pct,
            term_years: self.term_years,
        }
    }

    /// Validate the inputs that the formulas cannot absorb.
    ///
    /// Growth rates may be negative; combinations at or below -100% are
    /// rejected when they are compounded.
    pub fn validate(&self) -> RentVsBuyResult<()> {
        if self.home_cost < Decimal::ZERO {
            return Err(invalid("home_cost", "Home cost cannot be negative"));
        }
        if self.down_payment_pct < Decimal::ZERO || self.down_payment_pct > MAX_PCT {
            return Err(invalid(
                "down_payment_pct",
                "Down payment must be between 0% and 100%",
            ));
        }
        if self.interest_rate_pct < Decimal::ZERO {
            return Err(invalid("interest_rate_pct", "Interest rate cannot be negative"));
        }
        if self.term_years < 1 {
            return Err(invalid("term_years", "Loan term must be at least 1 year"));
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(RentVsBuyError::InvalidInput {
                field: "term_years".into(),
                reason: format!("Loan term cannot exceed {MAX_TERM_YEARS} years"),
            });
        }
        if self.closing_costs_pct < Decimal::ZERO || self.closing_costs_pct > MAX_PCT {
            return Err(invalid(
                "closing_costs_pct",
                "Closing costs must be between 0% and 100%",
            ));
        }
        if self.monthly_rent < Decimal::ZERO {
            return Err(invalid("monthly_rent", "Monthly rent cannot be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> RentVsBuyError {
    RentVsBuyError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}
