pub mod assumptions;
pub mod comparison;
pub mod mortgage;
pub mod ownership;
pub mod sweep;
