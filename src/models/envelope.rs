//! Envelope model
//!
//! An envelope is a named spending category holding a budget and the amount
//! spent against it so far. Envelopes are keyed by category name within a
//! user's envelope set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::amount::Amount;

/// A user's envelopes, keyed by category name
pub type EnvelopeSet = BTreeMap<String, Envelope>;

/// A single budget envelope
///
/// Both fields are raw numbers rather than [`Amount`]s: every validated write
/// goes through an `Amount`, but a reference-mode transfer may push a budget
/// below zero and that state must be representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Amount budgeted to this envelope
    pub budget: f64,

    /// Amount spent from this envelope
    #[serde(default)]
    pub spending: f64,
}

impl Envelope {
    /// Create a fresh envelope with nothing spent
    pub fn new(budget: Amount) -> Self {
        Self {
            budget: budget.value(),
            spending: 0.0,
        }
    }

    /// Replace the budget
    pub fn set_budget(&mut self, budget: Amount) {
        self.budget = budget.value();
    }

    /// Replace the spending amount
    pub fn set_spending(&mut self, spending: Amount) {
        self.spending = spending.value();
    }

    /// Shift the budget by a signed delta (used by transfers)
    pub fn adjust_budget(&mut self, delta: f64) {
        self.budget += delta;
    }

    /// Validate the envelope
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        if self.budget < 0.0 {
            return Err(EnvelopeValidationError::NegativeBudget);
        }

        if self.spending < 0.0 {
            return Err(EnvelopeValidationError::NegativeSpending);
        }

        if self.spending > self.budget {
            return Err(EnvelopeValidationError::SpendingExceedsBudget {
                spending: self.spending,
                budget: self.budget,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "budget: {}, spending: {}", self.budget, self.spending)
    }
}

/// Validation errors for envelopes
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeValidationError {
    NegativeBudget,
    NegativeSpending,
    SpendingExceedsBudget { spending: f64, budget: f64 },
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget cannot be negative"),
            Self::NegativeSpending => write!(f, "Spending cannot be negative"),
            Self::SpendingExceedsBudget { spending, budget } => {
                write!(f, "Spending {} exceeds budget {}", spending, budget)
            }
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}
