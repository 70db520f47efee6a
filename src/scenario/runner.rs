//! Scenario comparison across candidate extra-payment amounts

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::candidates::generate_candidates;
use crate::debt::Debt;
use crate::error::ValidationError;
use crate::simulation::{ScenarioResult, SimulationConfig, SimulationEngine};

/// Caller's monthly budget situation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetProfile {
    /// Total monthly income; must be positive
    pub monthly_income: f64,

    /// Amount left for debt after expenses and savings; must be non-negative
    pub available_for_debt: f64,

    /// Extra amount the user has committed on top of the minimums
    pub extra_contribution: f64,
}

/// Outcome of one comparison run: the minimum-only baseline plus every
/// accelerated scenario, ascending by extra payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub baseline: ScenarioResult,
    pub scenarios: Vec<ScenarioResult>,

    /// Sum of active balances at the start of the comparison
    pub total_debt: f64,

    /// Sum of contractual minimum payments across active debts
    pub total_min_payments: f64,

    /// Budget figure the candidates were generated from
    pub available_for_debt: f64,
}

/// Runs the simulator once per candidate amount plus once for the baseline
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: SimulationEngine,
}

impl ScenarioRunner {
    /// Create a runner with the default 360-month cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a custom simulation config
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config),
        }
    }

    /// Compare payoff scenarios for the given debts and budget profile.
    ///
    /// Validation precedes all simulation; a rejected profile produces zero
    /// scenario runs. Debts already paid off are excluded up front. Each
    /// scenario is a pure function of the shared read-only snapshot, so the
    /// candidate runs execute on the rayon worker pool.
    pub fn compare(
        &self,
        debts: &[Debt],
        profile: &BudgetProfile,
    ) -> Result<ComparisonResult, ValidationError> {
        if profile.monthly_income <= 0.0 {
            return Err(ValidationError::NonPositiveIncome);
        }
        if profile.available_for_debt < 0.0 {
            return Err(ValidationError::NegativeAvailableBudget);
        }

        let active: Vec<Debt> = debts.iter().filter(|d| d.is_active()).cloned().collect();
        if active.is_empty() {
            return Err(ValidationError::NoActiveDebts);
        }

        let total_debt: f64 = active.iter().map(|d| d.balance).sum();
        let total_min_payments: f64 = active.iter().map(|d| d.min_payment).sum();

        let mut baseline = self.engine.simulate(&active, 0.0);
        baseline.scenario_name = "Minimum Payments Only".to_string();
        baseline.scenario_description = "Pay only minimum required payments".to_string();
        if !baseline.is_paid_off() {
            log::warn!(
                "baseline never converges: {:.2} remaining after {} months",
                baseline.remaining_debt(),
                baseline.months
            );
        }

        let candidates =
            generate_candidates(profile.available_for_debt, profile.extra_contribution);
        log::info!(
            "simulating {} accelerated scenarios against a {}-month baseline",
            candidates.len(),
            baseline.months
        );

        let scenarios: Vec<ScenarioResult> = candidates
            .par_iter()
            .map(|candidate| {
                let mut result = self.engine.simulate(&active, candidate.amount);
                candidate.apply_to(&mut result);
                result.interest_saved =
                    (baseline.total_interest() - result.total_interest()).max(0.0);
                result.time_saved_months = baseline.months.saturating_sub(result.months);
                result
            })
            .collect();

        Ok(ComparisonResult {
            baseline,
            scenarios,
            total_debt,
            total_min_payments,
            available_for_debt: profile.available_for_debt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::AccountKind;
    use approx::assert_abs_diff_eq;

    fn test_debts() -> Vec<Debt> {
        vec![Debt::new(
            "Visa",
            AccountKind::CreditCard,
            1000.0,
            100.0,
            0.12,
        )]
    }

    fn test_profile() -> BudgetProfile {
        BudgetProfile {
            monthly_income: 3000.0,
            available_for_debt: 0.0,
            extra_contribution: 200.0,
        }
    }

    #[test]
    fn test_non_positive_income_rejected() {
        let runner = ScenarioRunner::new();
        let profile = BudgetProfile {
            monthly_income: 0.0,
            available_for_debt: 100.0,
            extra_contribution: 0.0,
        };
        let err = runner.compare(&test_debts(), &profile).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveIncome);
    }

    #[test]
    fn test_negative_budget_rejected_before_simulation() {
        let runner = ScenarioRunner::new();
        let profile = BudgetProfile {
            monthly_income: 3000.0,
            available_for_debt: -50.0,
            extra_contribution: 0.0,
        };
        let err = runner.compare(&test_debts(), &profile).unwrap_err();
        assert_eq!(err, ValidationError::NegativeAvailableBudget);
    }

    #[test]
    fn test_no_active_debts_rejected() {
        let runner = ScenarioRunner::new();
        let paid_off = vec![Debt::new("Visa", AccountKind::CreditCard, 0.0, 100.0, 0.12)];
        let err = runner.compare(&paid_off, &test_profile()).unwrap_err();
        assert_eq!(err, ValidationError::NoActiveDebts);
    }

    #[test]
    fn test_baseline_first_with_zero_savings() {
        let runner = ScenarioRunner::new();
        let result = runner.compare(&test_debts(), &test_profile()).unwrap();

        assert_eq!(result.baseline.months, 11);
        assert_abs_diff_eq!(result.baseline.extra_payment, 0.0);
        assert_abs_diff_eq!(result.baseline.interest_saved, 0.0);
        assert_eq!(result.baseline.time_saved_months, 0);
        assert_eq!(result.baseline.scenario_name, "Minimum Payments Only");
        assert_abs_diff_eq!(result.total_debt, 1000.0);
        assert_abs_diff_eq!(result.total_min_payments, 100.0);
    }

    #[test]
    fn test_savings_attached_per_candidate() {
        let runner = ScenarioRunner::new();
        let result = runner.compare(&test_debts(), &test_profile()).unwrap();

        // The user's €200 contribution is one of the candidates
        let two_hundred = result
            .scenarios
            .iter()
            .find(|s| (s.extra_payment - 200.0).abs() < 1e-9)
            .unwrap();
        assert_eq!(two_hundred.months, 4);
        assert_eq!(two_hundred.time_saved_months, 7);
        assert!(two_hundred.interest_saved > 0.0);
        assert_abs_diff_eq!(two_hundred.interest_saved, 58.98 - 22.48, epsilon = 0.01);
    }

    #[test]
    fn test_scenarios_ascending_with_monotonic_benefit() {
        let runner = ScenarioRunner::new();
        let profile = BudgetProfile {
            monthly_income: 3000.0,
            available_for_debt: 600.0,
            extra_contribution: 150.0,
        };
        let debts = vec![
            Debt::new("Debt A", AccountKind::CreditCard, 2500.0, 75.0, 0.20),
            Debt::new("Debt B", AccountKind::Loan, 4000.0, 120.0, 0.07),
        ];
        let result = runner.compare(&debts, &profile).unwrap();
        assert!(!result.scenarios.is_empty());

        for pair in result.scenarios.windows(2) {
            assert!(pair[0].extra_payment < pair[1].extra_payment);
            assert!(pair[1].months <= pair[0].months);
            assert!(pair[1].interest_saved >= pair[0].interest_saved - 1e-9);
        }
    }

    #[test]
    fn test_inactive_debts_excluded() {
        let runner = ScenarioRunner::new();
        let debts = vec![
            Debt::new("Paid", AccountKind::CreditCard, 0.005, 50.0, 0.18),
            Debt::new("Open", AccountKind::Loan, 1200.0, 60.0, 0.07),
        ];
        let result = runner.compare(&debts, &test_profile()).unwrap();

        assert_abs_diff_eq!(result.total_debt, 1200.0);
        assert_abs_diff_eq!(result.total_min_payments, 60.0);
        for plan in &result.baseline.monthly_plan {
            assert!(plan.payments.iter().all(|p| p.name == "Open"));
        }
    }
}
