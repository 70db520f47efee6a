//! Month-by-month amortization simulation

mod engine;
mod schedule;
mod state;

pub use engine::{SimulationConfig, SimulationEngine};
pub use schedule::{MonthPlan, MonthlyPaymentRecord, ScenarioResult, ScenarioSummary};
pub use state::{DebtState, SimulationState};

/// Universal "effectively zero" threshold for monetary comparisons
pub const BALANCE_EPSILON: f64 = 0.01;

/// Default hard cap on simulated months (30 years)
pub const DEFAULT_MONTH_CAP: u32 = 360;
