//! Working balances for a single simulation run

use super::BALANCE_EPSILON;
use crate::debt::Debt;

/// One debt's mutable slot within a run, in avalanche priority order
#[derive(Debug, Clone)]
pub struct DebtState {
    /// Account identifier, copied from the input snapshot
    pub name: String,

    /// Remaining balance, floored at zero after every payment
    pub balance: f64,

    /// Contractual minimum monthly payment
    pub min_payment: f64,

    /// Monthly interest rate (annual / 12)
    pub monthly_rate: f64,
}

impl DebtState {
    pub fn is_active(&self) -> bool {
        self.balance > BALANCE_EPSILON
    }
}

/// Per-run working copy of all debt balances.
///
/// Owned exclusively by one simulation run; the input snapshot is never
/// mutated. Priority order is fixed at construction: annual rate descending,
/// stable on ties, and never recomputed as balances change — payoff only
/// removes debts from contention, it cannot reorder the rest.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current simulated month (1-indexed once the loop starts)
    pub month: u32,

    /// Debt slots in avalanche priority order
    pub debts: Vec<DebtState>,
}

impl SimulationState {
    /// Initialize working balances from a debt snapshot
    pub fn from_debts(debts: &[Debt]) -> Self {
        let mut ordered: Vec<&Debt> = debts.iter().collect();
        ordered.sort_by(|a, b| b.annual_rate.total_cmp(&a.annual_rate));

        let debts = ordered
            .into_iter()
            .map(|d| DebtState {
                name: d.name.clone(),
                balance: d.balance,
                min_payment: d.min_payment,
                monthly_rate: d.monthly_rate(),
            })
            .collect();

        Self { month: 0, debts }
    }

    /// Whether any debt still carries a balance above the epsilon
    pub fn any_active(&self) -> bool {
        self.debts.iter().any(|d| d.is_active())
    }

    /// Sum of all remaining balances
    pub fn remaining_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.balance).sum()
    }

    /// Sum of all contractual minimum payments
    pub fn total_min_payments(&self) -> f64 {
        self.debts.iter().map(|d| d.min_payment).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::AccountKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_avalanche_ordering() {
        let debts = vec![
            Debt::new("Low", AccountKind::Loan, 500.0, 25.0, 0.07),
            Debt::new("High", AccountKind::CreditCard, 500.0, 25.0, 0.20),
            Debt::new("Mid", AccountKind::CreditCard, 500.0, 25.0, 0.13),
        ];

        let state = SimulationState::from_debts(&debts);
        let names: Vec<&str> = state.debts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_tied_rates_keep_input_order() {
        let debts = vec![
            Debt::new("First", AccountKind::CreditCard, 500.0, 25.0, 0.15),
            Debt::new("Second", AccountKind::CreditCard, 300.0, 25.0, 0.15),
        ];

        let state = SimulationState::from_debts(&debts);
        assert_eq!(state.debts[0].name, "First");
        assert_eq!(state.debts[1].name, "Second");
    }

    #[test]
    fn test_totals() {
        let debts = vec![
            Debt::new("A", AccountKind::CreditCard, 500.0, 25.0, 0.20),
            Debt::new("B", AccountKind::Loan, 1500.0, 75.0, 0.07),
        ];

        let state = SimulationState::from_debts(&debts);
        assert_abs_diff_eq!(state.remaining_debt(), 2000.0);
        assert_abs_diff_eq!(state.total_min_payments(), 100.0);
        assert!(state.any_active());
    }
}
