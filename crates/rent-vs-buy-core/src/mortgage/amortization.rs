//! Month-by-month amortization ledger with home equity tracking.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RentVsBuyError;
use crate::mortgage::payment::{monthly_mortgage_payment, validate_loan_terms};
use crate::time_value::{
    monthly_rate, pct_to_rate, round_pct, round_whole, within_range, MONTHS_PER_YEAR,
};
use crate::types::{Money, Percent};
use crate::RentVsBuyResult;

const FULL_EQUITY_PCT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One payment period of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Loan year, starting at 1
    pub year: u32,
    /// Month within the loan year, 1..=12
    pub month: u32,
    /// Sequential payment number, 1..=term_years * 12
    pub payment_number: u32,
    pub principal_payment: Money,
    pub interest_payment: Money,
    /// Balance still owed after this payment
    pub remaining_balance: Money,
    /// Share of the home owned outright after this payment (0..=100)
    pub equity_pct: Percent,
}

/// Serializable request for a schedule. The payment is derived from the loan
/// terms when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    pub loan_amount: Money,
    pub annual_interest_rate_pct: Percent,
    pub term_years: u32,
    pub down_payment_pct: Percent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
}

impl AmortizationInput {
    pub fn schedule(&self) -> RentVsBuyResult<Vec<AmortizationRow>> {
        let monthly_payment = match self.monthly_payment {
            Some(payment) => payment,
            None => monthly_mortgage_payment(
                self.loan_amount,
                self.annual_interest_rate_pct,
                self.term_years,
            )?,
        };
        amortization_schedule(
            self.loan_amount,
            self.annual_interest_rate_pct,
            self.term_years,
            self.down_payment_pct,
            monthly_payment,
        )
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the amortization schedule for a fixed monthly payment.
///
/// The home value is back-computed from the loan so that down payment plus
/// loan equals the price; equity starts at the down payment and grows by each
/// principal payment. Money fields are rounded to whole units and equity to
/// two decimals when each row is emitted; the running balances are not.
///
/// A zero loan means the home is owned outright: every row carries zero
/// payments and 100% equity.
pub fn amortization_schedule(
    loan_amount: Money,
    annual_interest_rate_pct: Percent,
    term_years: u32,
    down_payment_pct: Percent,
    monthly_payment: Money,
) -> RentVsBuyResult<Vec<AmortizationRow>> {
    validate_loan_terms(loan_amount, annual_interest_rate_pct, term_years)?;
    validate_down_payment(loan_amount, down_payment_pct)?;
    if monthly_payment < Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment cannot be negative".into(),
        });
    }

    let number_of_payments = term_years * MONTHS_PER_YEAR;
    let mut schedule = Vec::with_capacity(number_of_payments as usize);

    if loan_amount.is_zero() {
        for payment_number in 1..=number_of_payments {
            let (year, month) = period_of(payment_number);
            schedule.push(AmortizationRow {
                year,
                month,
                payment_number,
                principal_payment: Decimal::ZERO,
                interest_payment: Decimal::ZERO,
                remaining_balance: Decimal::ZERO,
                equity_pct: FULL_EQUITY_PCT,
            });
        }
        return Ok(schedule);
    }

    let rate = monthly_rate(annual_interest_rate_pct);
    let down_payment_share = pct_to_rate(down_payment_pct);
    let total_home_value = within_range(
        loan_amount.checked_div(Decimal::ONE - down_payment_share),
        "home value",
    )?;

    let mut remaining_balance = loan_amount;
    let mut equity = total_home_value * down_payment_share;

    tracing::debug!(
        loan_amount = %loan_amount,
        monthly_payment = %monthly_payment,
        payments = number_of_payments,
        "building amortization schedule"
    );

    for payment_number in 1..=number_of_payments {
        let interest_payment = within_range(remaining_balance.checked_mul(rate), "interest")?;
        let principal_payment =
            within_range(monthly_payment.checked_sub(interest_payment), "principal")?;
        remaining_balance = within_range(
            remaining_balance.checked_sub(principal_payment),
            "remaining balance",
        )?;
        equity = within_range(equity.checked_add(principal_payment), "home equity")?;
        let equity_pct = within_range(
            equity
                .checked_div(total_home_value)
                .and_then(|share| share.checked_mul(FULL_EQUITY_PCT)),
            "equity share",
        )?;

        let (year, month) = period_of(payment_number);
        schedule.push(AmortizationRow {
            year,
            month,
            payment_number,
            principal_payment: round_whole(principal_payment),
            interest_payment: round_whole(interest_payment),
            remaining_balance: round_whole(remaining_balance),
            equity_pct: round_pct(equity_pct),
        });
    }

    Ok(schedule)
}

/// Total interest over the life of the schedule (sum of the rounded rows).
pub fn total_interest(schedule: &[AmortizationRow]) -> RentVsBuyResult<Money> {
    schedule.iter().try_fold(Decimal::ZERO, |total, row| {
        within_range(total.checked_add(row.interest_payment), "total interest")
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// (year, month) for a 1-based payment number.
fn period_of(payment_number: u32) -> (u32, u32) {
    let index = payment_number - 1;
    (index / MONTHS_PER_YEAR + 1, index % MONTHS_PER_YEAR + 1)
}

fn validate_down_payment(loan_amount: Money, down_payment_pct: Percent) -> RentVsBuyResult<()> {
    if down_payment_pct < Decimal::ZERO || down_payment_pct > FULL_EQUITY_PCT {
        return Err(RentVsBuyError::InvalidInput {
            field: "down_payment_pct".into(),
            reason: "Down payment must be between 0% and 100%".into(),
        });
    }
    if down_payment_pct == FULL_EQUITY_PCT && !loan_amount.is_zero() {
        return Err(RentVsBuyError::InvalidInput {
            field: "down_payment_pct".into(),
            reason: "A 100% down payment leaves no loan to amortize".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    /// $800k home, 20% down, 7% over 30 years
    fn default_schedule() -> Vec<AmortizationRow> {
        let payment = monthly_mortgage_payment(dec!(640000), dec!(7), 30).unwrap();
        amortization_schedule(dec!(640000), dec!(7), 30, dec!(20), payment).unwrap()
    }

    #[test]
    fn test_schedule_length() {
        assert_eq!(default_schedule().len(), 360);
    }

    #[test]
    fn test_first_payment_row() {
        let schedule = default_schedule();
        assert_eq!(
            schedule[0],
            AmortizationRow {
                year: 1,
                month: 1,
                payment_number: 1,
                principal_payment: dec!(525),
                interest_payment: dec!(3733),
                remaining_balance: dec!(639475),
                equity_pct: dec!(20.07),
            }
        );
    }

    #[test]
    fn test_year_end_row() {
        let row = &default_schedule()[11];
        assert_eq!((row.year, row.month, row.payment_number), (1, 12, 12));
        assert_eq!(row.remaining_balance, dec!(633499));
        assert_eq!(row.equity_pct, dec!(20.81));
    }

    #[test]
    fn test_second_year_starts_at_month_one() {
        let row = &default_schedule()[12];
        assert_eq!((row.year, row.month, row.payment_number), (2, 1, 13));
    }

    #[test]
    fn test_final_row_pays_off_loan() {
        let schedule = default_schedule();
        let last = schedule.last().unwrap();
        assert_eq!((last.year, last.month, last.payment_number), (30, 12, 360));
        assert_eq!(last.remaining_balance, Decimal::ZERO);
        assert_eq!(last.equity_pct, dec!(100));
    }

    #[test]
    fn test_principal_plus_interest_matches_payment() {
        let payment = monthly_mortgage_payment(dec!(640000), dec!(7), 30).unwrap();
        for row in default_schedule() {
            let diff = (row.principal_payment + row.interest_payment - payment).abs();
            assert!(diff <= dec!(1), "row {} off by {diff}", row.payment_number);
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule =
            amortization_schedule(dec!(120000), Decimal::ZERO, 10, dec!(20), dec!(1000)).unwrap();
        assert!(schedule.iter().all(|r| r.interest_payment.is_zero()));
        assert!(schedule.iter().all(|r| r.principal_payment == dec!(1000)));
        assert_eq!(schedule[59].remaining_balance, dec!(60000));
        assert_eq!(schedule.last().unwrap().equity_pct, dec!(100));
    }

    #[test]
    fn test_zero_down_payment_starts_from_zero_equity() {
        let payment = monthly_mortgage_payment(dec!(300000), dec!(6), 30).unwrap();
        let schedule =
            amortization_schedule(dec!(300000), dec!(6), 30, Decimal::ZERO, payment).unwrap();
        assert!(schedule[0].equity_pct <= dec!(0.1));
        assert_eq!(schedule.last().unwrap().equity_pct, dec!(100));
    }

    #[test]
    fn test_full_down_payment_owns_outright() {
        let schedule =
            amortization_schedule(Decimal::ZERO, dec!(7), 15, dec!(100), Decimal::ZERO).unwrap();
        assert_eq!(schedule.len(), 180);
        assert!(schedule.iter().all(|r| r.principal_payment.is_zero()
            && r.interest_payment.is_zero()
            && r.equity_pct == dec!(100)));
    }

    #[test]
    fn test_full_down_payment_with_loan_rejected() {
        let err =
            amortization_schedule(dec!(1000), dec!(7), 15, dec!(100), dec!(10)).unwrap_err();
        assert!(matches!(err, RentVsBuyError::InvalidInput { .. }));
    }

    #[test]
    fn test_down_payment_above_hundred_rejected() {
        assert!(amortization_schedule(dec!(1000), dec!(7), 15, dec!(120), dec!(10)).is_err());
        assert!(amortization_schedule(dec!(1000), dec!(7), 15, dec!(-5), dec!(10)).is_err());
    }

    #[test]
    fn test_negative_payment_rejected() {
        assert!(amortization_schedule(dec!(1000), dec!(7), 15, dec!(20), dec!(-10)).is_err());
    }

    #[test]
    fn test_overlong_term_rejected_before_allocating() {
        let err = amortization_schedule(dec!(1000), dec!(7), u32::MAX, dec!(20), dec!(10))
            .unwrap_err();
        assert!(matches!(err, RentVsBuyError::InvalidInput { ref field, .. } if field == "term_years"));
    }

    #[test]
    fn test_out_of_range_home_value_is_an_error() {
        let err = amortization_schedule(
            dec!(10000000000000000000000000000),
            dec!(5),
            1,
            dec!(99.99),
            dec!(1),
        )
        .unwrap_err();
        assert!(matches!(err, RentVsBuyError::FinancialImpossibility(_)), "{err}");
    }

    #[test]
    fn test_runaway_balance_is_an_error() {
        // A payment far below the interest grows the balance past the decimal range
        let err = amortization_schedule(
            dec!(10000000000000000000000000000),
            dec!(1200),
            10,
            Decimal::ZERO,
            Decimal::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, RentVsBuyError::FinancialImpossibility(_)), "{err}");
    }

    #[test]
    fn test_input_derives_payment_when_missing() {
        let input = AmortizationInput {
            loan_amount: dec!(640000),
            annual_interest_rate_pct: dec!(7),
            term_years: 30,
            down_payment_pct: dec!(20),
            monthly_payment: None,
        };
        assert_eq!(input.schedule().unwrap(), default_schedule());
    }

    #[test]
    fn test_total_interest() {
        let schedule =
            amortization_schedule(dec!(120000), Decimal::ZERO, 10, dec!(20), dec!(1000)).unwrap();
        assert_eq!(total_interest(&schedule).unwrap(), Decimal::ZERO);
        assert!(total_interest(&default_schedule()).unwrap() > dec!(850000));
    }
}
