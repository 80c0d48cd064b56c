pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "ownership")]
pub mod ownership;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "sweep")]
pub mod sweep;

pub use error::RentVsBuyError;
pub use types::*;

/// Standard result type for all rent-vs-buy operations
pub type RentVsBuyResult<T> = Result<T, RentVsBuyError>;
