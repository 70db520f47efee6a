//! Structured validation errors, detected before any simulation starts

use thiserror::Error;

/// Input validation failures surfaced to the caller as tagged errors so a
/// specific remediation hint can be rendered for each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("monthly income must be greater than 0")]
    NonPositiveIncome,

    #[error("expenses exceed income; the available debt budget is negative")]
    NegativeAvailableBudget,

    #[error("no active debt accounts found")]
    NoActiveDebts,
}

impl ValidationError {
    /// Stable machine-readable tag for the boundary contract
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveIncome => "non_positive_income",
            ValidationError::NegativeAvailableBudget => "negative_available_budget",
            ValidationError::NoActiveDebts => "no_active_debts",
        }
    }
}
