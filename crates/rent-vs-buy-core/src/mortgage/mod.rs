pub mod amortization;
pub mod payment;

pub use amortization::{amortization_schedule, total_interest, AmortizationInput, AmortizationRow};
pub use payment::{monthly_mortgage_payment, LoanParameters, MAX_TERM_YEARS};
