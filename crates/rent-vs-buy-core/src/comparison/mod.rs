pub mod analysis;
pub mod assumptions;
pub mod summary;

pub use analysis::{analyze_rent_vs_buy, scenario_outcome, RentVsBuyOutput, ScenarioOutcome, Toplines};
pub use assumptions::ScenarioAssumptions;
pub use summary::{scenario_summary, scenario_summary_with_schedule, ReinvestBalance, SummaryRow};
