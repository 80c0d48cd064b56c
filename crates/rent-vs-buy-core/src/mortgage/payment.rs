//! Fixed-rate mortgage payment.
//!
//! The payment is the level monthly amount that amortizes the loan to exactly
//! zero over `term_years * 12` payments under monthly compounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RentVsBuyError;
use crate::time_value::{compound, monthly_rate, within_range, MONTHS_PER_YEAR};
use crate::types::{Money, Percent};
use crate::RentVsBuyResult;

/// Longest loan term accepted, in years
pub const MAX_TERM_YEARS: u32 = 100;

/// Loan terms for a fixed-rate mortgage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed (home cost less down payment)
    pub loan_amount: Money,
    /// Annual interest rate as a percentage (7 = 7%)
    pub annual_interest_rate_pct: Percent,
    /// Loan term in years
    pub term_years: u32,
}

impl LoanParameters {
    /// Saturates for terms past [`MAX_TERM_YEARS`], which are rejected when
    /// the payment is computed.
    pub fn number_of_payments(&self) -> u32 {
        self.term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn monthly_payment(&self) -> RentVsBuyResult<Money> {
        monthly_mortgage_payment(
            self.loan_amount,
            self.annual_interest_rate_pct,
            self.term_years,
        )
    }
}

/// Standard fixed-rate mortgage payment: P * r(1+r)^n / ((1+r)^n - 1)
///
/// A zero rate falls back to straight-line repayment, `P / n`.
pub fn monthly_mortgage_payment(
    loan_amount: Money,
    annual_interest_rate_pct: Percent,
    term_years: u32,
) -> RentVsBuyResult<Money> {
    validate_loan_terms(loan_amount, annual_interest_rate_pct, term_years)?;

    let rate = monthly_rate(annual_interest_rate_pct);
    let number_of_payments = term_years * MONTHS_PER_YEAR;

    if rate.is_zero() {
        return Ok(loan_amount / Decimal::from(number_of_payments));
    }

    let factor = compound(rate, number_of_payments)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(RentVsBuyError::FinancialImpossibility(format!(
            "monthly rate {rate} is too small to amortize over {number_of_payments} payments"
        )));
    }

    within_range(
        loan_amount
            .checked_mul(rate)
            .and_then(|v| v.checked_mul(factor))
            .and_then(|v| v.checked_div(denominator)),
        "monthly payment",
    )
}

/// Reject loan terms that would otherwise surface as NaN-like garbage.
pub(crate) fn validate_loan_terms(
    loan_amount: Money,
    annual_interest_rate_pct: Percent,
    term_years: u32,
) -> RentVsBuyResult<()> {
    if loan_amount < Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount cannot be negative".into(),
        });
    }
    if annual_interest_rate_pct < Decimal::ZERO {
        return Err(RentVsBuyError::InvalidInput {
            field: "annual_interest_rate_pct".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if term_years < 1 {
        return Err(RentVsBuyError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }
    if term_years > MAX_TERM_YEARS {
        return Err(RentVsBuyError::InvalidInput {
            field: "term_years".into(),
            reason: format!("Loan term cannot exceed {MAX_TERM_YEARS} years"),
        });
    }
    Ok(())
}
