use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates quoted as percentages (5 = 5%), the way the inputs are collected.
pub type Percent = Decimal;

/// Plain decimal rates (0.05 = 5%), used only inside the compounding math.
pub type Rate = Decimal;

/// The three financial paths being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Buy the home; wealth is the equity at the appreciated home value.
    Buy,
    /// Rent and invest the down payment that was never spent.
    Rent,
    /// Rent, invest the down payment, and re-invest each year's cost difference.
    RentReinvest,
}

pub const BUY_LABEL: &str = "Buy";
pub const RENT_LABEL: &str = "Rent";
pub const RENT_REINVEST_LABEL: &str = "Rent + Re-invest";

impl ScenarioKind {
    /// Every scenario, in tie-break order: on equal final values the earlier wins.
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Buy,
        ScenarioKind::RentReinvest,
        ScenarioKind::Rent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Buy => BUY_LABEL,
            ScenarioKind::Rent => RENT_LABEL,
            ScenarioKind::RentReinvest => RENT_REINVEST_LABEL,
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
