//! Boundary output contract consumed by presentation and export collaborators
//!
//! Collapses a comparison into display-ready rows with all monetary figures
//! rounded to 2 decimals. Callers that need the full month-by-month schedule
//! serialize `ScenarioResult` directly.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scenario::ComparisonResult;
use crate::simulation::ScenarioResult;

/// Round a monetary figure to 2 decimal places for display
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One display-ready scenario row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub scenario_description: String,
    pub months: u32,
    pub extra_payment: f64,
    pub consistent_monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub interest_saved: f64,
    pub time_saved_months: u32,
    pub remaining_debt: f64,
    pub paid_off: bool,
    pub is_budget_scenario: bool,
    pub user_contribution: f64,
    pub budget_allocation: f64,
    pub budget_percentage: f64,
}

impl ScenarioReport {
    fn from_result(result: &ScenarioResult) -> Self {
        Self {
            scenario_name: result.scenario_name.clone(),
            scenario_description: result.scenario_description.clone(),
            months: result.months,
            extra_payment: round_cents(result.extra_payment),
            consistent_monthly_payment: round_cents(result.consistent_monthly_payment),
            total_paid: round_cents(result.total_paid()),
            total_interest: round_cents(result.total_interest()),
            interest_saved: round_cents(result.interest_saved),
            time_saved_months: result.time_saved_months,
            remaining_debt: round_cents(result.remaining_debt()),
            paid_off: result.is_paid_off(),
            is_budget_scenario: result.is_budget_scenario,
            user_contribution: round_cents(result.user_contribution),
            budget_allocation: round_cents(result.budget_allocation),
            budget_percentage: result.budget_percentage,
        }
    }
}

/// The full comparison packaged for export, baseline first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccelerationReport {
    pub generated_at: String,
    pub total_debt: f64,
    pub total_min_payments: f64,
    pub available_for_debt: f64,
    pub scenarios: Vec<ScenarioReport>,
}

impl AccelerationReport {
    pub fn from_comparison(comparison: &ComparisonResult) -> Self {
        let mut scenarios = Vec::with_capacity(comparison.scenarios.len() + 1);
        scenarios.push(ScenarioReport::from_result(&comparison.baseline));
        scenarios.extend(comparison.scenarios.iter().map(ScenarioReport::from_result));

        Self {
            generated_at: Utc::now().to_rfc3339(),
            total_debt: round_cents(comparison.total_debt),
            total_min_payments: round_cents(comparison.total_min_payments),
            available_for_debt: round_cents(comparison.available_for_debt),
            scenarios,
        }
    }
}

/// Tagged failure shape for the boundary, rendered instead of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
}

impl From<ValidationError> for ErrorReport {
    fn from(err: ValidationError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::{AccountKind, Debt};
    use crate::scenario::{BudgetProfile, ScenarioRunner};
    use approx::assert_abs_diff_eq;

    fn sample_comparison() -> ComparisonResult {
        let debts = vec![Debt::new(
            "Visa",
            AccountKind::CreditCard,
            1000.0,
            100.0,
            0.12,
        )];
        let profile = BudgetProfile {
            monthly_income: 3000.0,
            available_for_debt: 0.0,
            extra_contribution: 200.0,
        };
        ScenarioRunner::new().compare(&debts, &profile).unwrap()
    }

    #[test]
    fn test_round_cents() {
        assert_abs_diff_eq!(round_cents(58.98488), 58.98);
        assert_abs_diff_eq!(round_cents(103.456), 103.46);
        assert_abs_diff_eq!(round_cents(-0.004), 0.0);
    }

    #[test]
    fn test_report_baseline_first_and_rounded() {
        let comparison = sample_comparison();
        let report = AccelerationReport::from_comparison(&comparison);

        assert_eq!(report.scenarios[0].scenario_name, "Minimum Payments Only");
        assert_eq!(report.scenarios.len(), comparison.scenarios.len() + 1);
        assert_abs_diff_eq!(report.scenarios[0].total_interest, 58.98);
        assert_abs_diff_eq!(report.total_debt, 1000.0);

        // Every monetary figure is a clean 2-decimal value
        for row in &report.scenarios {
            assert_abs_diff_eq!(row.total_paid, round_cents(row.total_paid));
            assert_abs_diff_eq!(row.interest_saved, round_cents(row.interest_saved));
        }
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = AccelerationReport::from_comparison(&sample_comparison());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"scenario_name\":\"Minimum Payments Only\""));
        assert!(json.contains("\"total_debt\":1000.0"));
    }

    #[test]
    fn test_error_report_tags() {
        let report = ErrorReport::from(ValidationError::NegativeAvailableBudget);
        assert_eq!(report.code, "negative_available_budget");
        assert!(report.message.contains("negative"));
    }
}
