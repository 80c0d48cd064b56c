use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentVsBuyError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Inconsistent schedule: amortization schedule does not cover year {missing_year} of a {term_years}-year term")]
    InconsistentSchedule { term_years: u32, missing_year: u32 },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RentVsBuyError {
    fn from(e: serde_json::Error) -> Self {
        RentVsBuyError::SerializationError(e.to_string())
    }
}
