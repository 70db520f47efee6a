//! Payoff schedule output structures for simulation runs

use serde::{Deserialize, Serialize};

use super::BALANCE_EPSILON;

/// One debt's payment in one simulated month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPaymentRecord {
    /// Account identifier
    pub name: String,

    /// Amount actually paid this month, including any avalanche overflow
    pub amount: f64,

    /// Whether the balance dropped to effectively zero after this payment
    pub is_paid_off: bool,
}

/// One simulated month across all debts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthPlan {
    /// Simulated month (1-indexed)
    pub month: u32,

    /// Per-debt payments, in avalanche priority order
    pub payments: Vec<MonthlyPaymentRecord>,

    /// Total disbursed this month; at most the scenario's monthly budget
    pub total_payment: f64,

    /// Interest accrued across all debts this month
    pub interest_accrued: f64,

    /// Sum of all balances after this month's payments
    pub remaining_debt: f64,
}

/// Output of one simulation run: the full payoff schedule plus savings
/// metrics and display metadata attached by the scenario comparator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Payoff horizon in months (or the cap, if never reached)
    pub months: u32,

    /// Candidate extra payment simulated on top of the minimums
    pub extra_payment: f64,

    /// Sum of minimums + extra, held constant across all months
    pub consistent_monthly_payment: f64,

    /// One entry per simulated month
    pub monthly_plan: Vec<MonthPlan>,

    /// Interest saved relative to the minimum-only baseline, floored at 0
    pub interest_saved: f64,

    /// Months saved relative to the minimum-only baseline, floored at 0
    pub time_saved_months: u32,

    /// Sum of starting balances across all debts
    pub original_debt: f64,

    // Display metadata, filled in by the scenario comparator
    pub scenario_name: String,
    pub scenario_description: String,
    pub is_budget_scenario: bool,
    pub user_contribution: f64,
    pub budget_allocation: f64,
    pub budget_percentage: f64,
}

impl ScenarioResult {
    pub(super) fn new(
        months: u32,
        extra_payment: f64,
        consistent_monthly_payment: f64,
        monthly_plan: Vec<MonthPlan>,
        original_debt: f64,
    ) -> Self {
        Self {
            months,
            extra_payment,
            consistent_monthly_payment,
            monthly_plan,
            interest_saved: 0.0,
            time_saved_months: 0,
            original_debt,
            scenario_name: String::new(),
            scenario_description: String::new(),
            is_budget_scenario: false,
            user_contribution: 0.0,
            budget_allocation: 0.0,
            budget_percentage: 0.0,
        }
    }

    /// Total disbursed across the whole run
    pub fn total_paid(&self) -> f64 {
        self.monthly_plan.iter().map(|m| m.total_payment).sum()
    }

    /// Total interest for the run, reconstructed as everything paid minus
    /// the principal originally owed. For a run that hit the month cap the
    /// remaining balance is still outstanding, so this understates the
    /// interest actually accrued.
    pub fn total_interest(&self) -> f64 {
        self.total_paid() - self.original_debt
    }

    /// Sum of balances after the final simulated month
    pub fn remaining_debt(&self) -> f64 {
        self.monthly_plan
            .last()
            .map(|m| m.remaining_debt)
            .unwrap_or(self.original_debt)
    }

    /// Whether every debt reached effectively zero within the horizon
    pub fn is_paid_off(&self) -> bool {
        self.remaining_debt() <= BALANCE_EPSILON
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            months: self.months,
            consistent_monthly_payment: self.consistent_monthly_payment,
            total_paid: self.total_paid(),
            total_interest: self.total_interest(),
            remaining_debt: self.remaining_debt(),
            paid_off: self.is_paid_off(),
        }
    }
}

/// Summary statistics for a scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub months: u32,
    pub consistent_monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub remaining_debt: f64,
    pub paid_off: bool,
}
