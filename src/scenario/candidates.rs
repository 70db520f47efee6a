//! Candidate extra-payment amounts for scenario comparison

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::simulation::ScenarioResult;

/// Fixed ladder of extra-payment increments, independent of the budget
pub const FIXED_INCREMENTS: [f64; 7] = [50.0, 100.0, 200.0, 300.0, 500.0, 750.0, 1000.0];

/// Shares of the available budget to try as extra payments
pub const BUDGET_SHARES: [f64; 8] = [0.10, 0.25, 0.33, 0.50, 0.67, 0.75, 0.90, 1.00];

/// Budget shares stacked on top of the full user contribution
pub const COMBINED_SHARES: [f64; 4] = [0.25, 0.50, 0.75, 1.00];

/// Amounts below this are not worth a scenario of their own
pub const MEANINGFUL_AMOUNT_FLOOR: f64 = 10.0;

/// At most this many accelerated candidates (the baseline comes on top,
/// giving 12 scenarios total); a presentation cap, not a simulator limit
pub const MAX_CANDIDATES: usize = 11;

/// Provenance of a candidate amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CandidateKind {
    /// Fixed increment (or the user's own contribution)
    Fixed,
    /// Share of the available monthly budget
    BudgetShare { percentage: f64 },
    /// User contribution plus a share of the available budget
    Combined {
        user_contribution: f64,
        budget_allocation: f64,
    },
}

impl CandidateKind {
    /// Budget-derived candidates win metadata collisions in deduplication;
    /// they are more informative to the end user than a bare increment
    pub fn is_budget_derived(&self) -> bool {
        !matches!(self, CandidateKind::Fixed)
    }
}

/// One candidate extra-payment amount with its display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAmount {
    pub amount: f64,
    pub kind: CandidateKind,
    pub name: String,
    pub description: String,
}

impl CandidateAmount {
    /// Copy this candidate's display metadata onto a finished run
    pub fn apply_to(&self, result: &mut ScenarioResult) {
        result.scenario_name = self.name.clone();
        result.scenario_description = self.description.clone();
        match &self.kind {
            CandidateKind::Fixed => {}
            CandidateKind::BudgetShare { percentage } => {
                result.is_budget_scenario = true;
                result.budget_percentage = *percentage;
            }
            CandidateKind::Combined {
                user_contribution,
                budget_allocation,
            } => {
                result.is_budget_scenario = true;
                result.user_contribution = *user_contribution;
                result.budget_allocation = *budget_allocation;
            }
        }
    }
}

/// Produce the deduplicated, ascending set of candidate extra payments.
///
/// Candidates come from three families: shares of the available budget,
/// the fixed increment ladder (plus the user's own contribution), and
/// combined user + budget-share amounts. Duplicates are collapsed on the
/// whole-unit-rounded amount, the budget-derived metadata winning, and the
/// result is capped at [`MAX_CANDIDATES`].
pub fn generate_candidates(available_budget: f64, user_extra: f64) -> Vec<CandidateAmount> {
    let mut options = Vec::new();

    if available_budget > 0.0 {
        for share in BUDGET_SHARES {
            let amount = available_budget * share;
            if amount >= MEANINGFUL_AMOUNT_FLOOR {
                options.push(CandidateAmount {
                    amount,
                    kind: CandidateKind::BudgetShare {
                        percentage: share * 100.0,
                    },
                    name: format!("{:.0}% Available Budget", share * 100.0),
                    description: format!(
                        "Use {:.0}% of your €{:.0} available budget",
                        share * 100.0,
                        available_budget
                    ),
                });
            }
        }
    }

    let mut fixed_amounts = FIXED_INCREMENTS.to_vec();
    if user_extra > 0.0 {
        fixed_amounts.push(user_extra);
    }
    for amount in fixed_amounts {
        if amount >= MEANINGFUL_AMOUNT_FLOOR {
            options.push(CandidateAmount {
                amount,
                kind: CandidateKind::Fixed,
                name: format!("€{:.0} Extra Monthly", amount),
                description: format!("Add €{:.0} extra to monthly payments", amount),
            });
        }
    }

    if user_extra > 0.0 && available_budget > 0.0 {
        for share in COMBINED_SHARES {
            let budget_portion = available_budget * share;
            options.push(CandidateAmount {
                amount: user_extra + budget_portion,
                kind: CandidateKind::Combined {
                    user_contribution: user_extra,
                    budget_allocation: budget_portion,
                },
                name: format!("Your €{:.0} + {:.0}% Budget", user_extra, share * 100.0),
                description: format!(
                    "Your €{:.0} plus {:.0}% of available budget (€{:.0})",
                    user_extra,
                    share * 100.0,
                    budget_portion
                ),
            });
        }
    }

    // Deduplicate on the whole-unit amount; budget-derived wins a collision
    let mut unique: HashMap<i64, CandidateAmount> = HashMap::new();
    for option in options {
        let key = option.amount.round() as i64;
        if option.kind.is_budget_derived() || !unique.contains_key(&key) {
            unique.insert(key, option);
        }
    }

    let mut candidates: Vec<CandidateAmount> = unique.into_values().collect();
    candidates.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    candidates.truncate(MAX_CANDIDATES);
    candidates
}
