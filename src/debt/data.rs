//! Debt account data structures

use serde::{Deserialize, Serialize};

use crate::simulation::BALANCE_EPSILON;

/// Kind of interest-bearing account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Revolving credit card balance
    CreditCard,
    /// Installment loan (personal, auto, ...)
    Loan,
    /// Anything else carrying interest
    Other,
}

impl AccountKind {
    /// Fallback annual rate when a snapshot carries no explicit rate
    pub fn default_annual_rate(&self) -> f64 {
        match self {
            AccountKind::CreditCard => 0.15,
            AccountKind::Loan => 0.07,
            AccountKind::Other => 0.10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::CreditCard => "Credit Card",
            AccountKind::Loan => "Loan",
            AccountKind::Other => "Other",
        }
    }
}

/// One interest-bearing account under consideration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Identifier, unique within a simulation run
    pub name: String,

    /// Kind of account
    pub kind: AccountKind,

    /// Current amount owed, non-negative
    pub balance: f64,

    /// Contractual minimum monthly payment
    pub min_payment: f64,

    /// Nominal annual interest rate as a fraction (e.g. 0.15)
    pub annual_rate: f64,
}

impl Debt {
    /// Create a new debt with an explicit annual rate
    pub fn new(
        name: impl Into<String>,
        kind: AccountKind,
        balance: f64,
        min_payment: f64,
        annual_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            balance,
            min_payment,
            annual_rate,
        }
    }

    /// Normalize a raw balance snapshot into a debt record.
    /// Falls back to the kind's default rate when none is supplied.
    pub fn from_snapshot(
        name: impl Into<String>,
        kind: AccountKind,
        balance: f64,
        min_payment: f64,
        annual_rate: Option<f64>,
    ) -> Self {
        Self::new(
            name,
            kind,
            balance,
            min_payment,
            annual_rate.unwrap_or_else(|| kind.default_annual_rate()),
        )
    }

    /// Monthly interest rate, always derived from the annual rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Whether the account still carries a balance worth simulating
    pub fn is_active(&self) -> bool {
        self.balance > BALANCE_EPSILON
    }
}
