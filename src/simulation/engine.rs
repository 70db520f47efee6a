//! Core month-by-month amortization engine

use super::schedule::{MonthPlan, MonthlyPaymentRecord, ScenarioResult};
use super::state::SimulationState;
use super::{BALANCE_EPSILON, DEFAULT_MONTH_CAP};
use crate::debt::Debt;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Hard ceiling on simulated months; guarantees termination even when
    /// minimum payments cannot keep up with accruing interest
    pub month_cap: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            month_cap: DEFAULT_MONTH_CAP, // 30 years
        }
    }
}

/// Amortization simulator for one debt set and one extra-payment amount
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Create a new engine with the given config
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run one payoff simulation.
    ///
    /// Debts are prioritized by annual rate descending (avalanche), fixed at
    /// the start of the run. The monthly budget is the sum of minimum
    /// payments plus `extra_payment` and does not vary month to month. When
    /// `extra_payment` is zero the overflow phase is skipped entirely, so the
    /// result is exactly the minimum-only baseline.
    pub fn simulate(&self, debts: &[Debt], extra_payment: f64) -> ScenarioResult {
        let mut state = SimulationState::from_debts(debts);
        let original_debt = state.remaining_debt();
        let monthly_budget = state.total_min_payments() + extra_payment;
        let apply_overflow = extra_payment > 0.0;

        let mut monthly_plan = Vec::new();

        while state.any_active() && state.month < self.config.month_cap {
            state.month += 1;
            let plan = self.run_month(&mut state, monthly_budget, apply_overflow);
            monthly_plan.push(plan);
        }

        ScenarioResult::new(
            state.month,
            extra_payment,
            monthly_budget,
            monthly_plan,
            original_debt,
        )
    }

    /// Simulate a single month: accrue interest, pay minimums in priority
    /// order, then funnel the leftover budget down the priority order.
    fn run_month(
        &self,
        state: &mut SimulationState,
        monthly_budget: f64,
        apply_overflow: bool,
    ) -> MonthPlan {
        let mut payments: Vec<MonthlyPaymentRecord> = Vec::with_capacity(state.debts.len());
        // Payment record index per debt slot, for overflow top-ups
        let mut record_idx: Vec<Option<usize>> = vec![None; state.debts.len()];
        let mut available = monthly_budget;
        let mut total_payment = 0.0;
        let mut interest_accrued = 0.0;

        // Interest accrual + minimum payments. Payment is capped at the
        // post-interest balance so a balance never goes negative.
        for (i, debt) in state.debts.iter_mut().enumerate() {
            if !debt.is_active() {
                continue;
            }

            let interest = debt.balance * debt.monthly_rate;
            interest_accrued += interest;
            debt.balance += interest;

            let payment = debt.min_payment.min(debt.balance);
            debt.balance = (debt.balance - payment).max(0.0);

            record_idx[i] = Some(payments.len());
            payments.push(MonthlyPaymentRecord {
                name: debt.name.clone(),
                amount: payment,
                is_paid_off: debt.balance <= BALANCE_EPSILON,
            });

            total_payment += payment;
            available -= payment;
        }

        // Avalanche overflow: the highest-priority debt with a remaining
        // balance absorbs everything it can before the next one sees a cent.
        if apply_overflow {
            for (i, debt) in state.debts.iter_mut().enumerate() {
                if available <= BALANCE_EPSILON {
                    break;
                }
                if !debt.is_active() {
                    continue;
                }

                let extra = available.min(debt.balance);
                debt.balance = (debt.balance - extra).max(0.0);

                if let Some(idx) = record_idx[i] {
                    payments[idx].amount += extra;
                    payments[idx].is_paid_off = debt.balance <= BALANCE_EPSILON;
                }

                total_payment += extra;
                available -= extra;
            }
        }

        MonthPlan {
            month: state.month,
            payments,
            total_payment,
            interest_accrued,
            remaining_debt: state.remaining_debt(),
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
