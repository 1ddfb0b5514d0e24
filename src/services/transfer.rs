//! Transfer service
//!
//! Moves budget between two envelopes of the same user. Both envelopes change
//! inside one write-lock acquisition.
//!
//! The direction funds travel is selected by [`TransferMode`]. `Reference`
//! reproduces the established behavior of the service, which subtracts from
//! the named destination and adds to the named source. `Corrected` moves funds
//! from source to destination and conserves the pair's total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::{Amount, Envelope, TransferRequest};
use crate::storage::EnvelopeRepository;

/// Direction in which a transfer applies its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// `to.budget -= amount; from.budget += amount`
    #[default]
    Reference,
    /// `from.budget -= amount; to.budget += amount`
    Corrected,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Corrected => write!(f, "corrected"),
        }
    }
}

impl FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "corrected" => Ok(Self::Corrected),
            other => Err(format!(
                "unknown transfer mode '{}' (expected 'reference' or 'corrected')",
                other
            )),
        }
    }
}

/// Result of a successful transfer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferOutcome {
    pub category_from: String,
    pub category_to: String,
    pub amount: Amount,
    pub from: Envelope,
    pub to: Envelope,
}

/// Service for moving budget between envelopes
pub struct TransferService<'a> {
    storage: &'a EnvelopeRepository,
    mode: TransferMode,
}

impl<'a> TransferService<'a> {
    /// Create a transfer service using the default mode
    pub fn new(storage: &'a EnvelopeRepository) -> Self {
        Self::with_mode(storage, TransferMode::default())
    }

    /// Create a transfer service with an explicit mode
    pub fn with_mode(storage: &'a EnvelopeRepository, mode: TransferMode) -> Self {
        Self { storage, mode }
    }

    /// Get the mode this service applies
    pub fn mode(&self) -> TransferMode {
        self.mode
    }

    /// Transfer budget between two envelopes of a user
    ///
    /// Checks run in order: the user must be known, both categories must be
    /// non-empty and distinct, the amount must be a valid amount, both
    /// envelopes must exist, and the amount may not exceed the source budget.
    /// Nothing is written when either resulting budget would not be finite.
    pub fn transfer(&self, user: &str, request: &TransferRequest) -> EnvelopeResult<TransferOutcome> {
        let outcome = self.storage.write(|users| {
            let set = users
                .get_mut(user)
                .ok_or_else(|| EnvelopeError::user_not_found(user))?;

            let (from, to) = validate_categories(request)?;

            let amount = request
                .transfer_amt
                .ok_or_else(|| EnvelopeError::InvalidAmount("transfer_amt must be a number".into()))
                .and_then(|raw| {
                    Amount::new(raw).map_err(|e| EnvelopeError::InvalidAmount(e.to_string()))
                })?;

            let mut from_envelope = *set
                .get(from)
                .ok_or_else(|| EnvelopeError::category_not_found(user, from))?;
            let mut to_envelope = *set
                .get(to)
                .ok_or_else(|| EnvelopeError::category_not_found(user, to))?;

            if amount.value() > from_envelope.budget {
                return Err(EnvelopeError::InvalidAmount(format!(
                    "transfer of {} exceeds the {} budget of {}",
                    amount, from, from_envelope.budget
                )));
            }

            match self.mode {
                TransferMode::Reference => {
                    to_envelope.adjust_budget(-amount.value());
                    from_envelope.adjust_budget(amount.value());
                }
                TransferMode::Corrected => {
                    from_envelope.adjust_budget(-amount.value());
                    to_envelope.adjust_budget(amount.value());
                }
            }

            if !from_envelope.budget.is_finite() || !to_envelope.budget.is_finite() {
                return Err(EnvelopeError::InvalidAmount(format!(
                    "transfer of {} would overflow an envelope budget",
                    amount
                )));
            }

            set.insert(from.to_string(), from_envelope);
            set.insert(to.to_string(), to_envelope);

            Ok(TransferOutcome {
                category_from: from.to_string(),
                category_to: to.to_string(),
                amount,
                from: from_envelope,
                to: to_envelope,
            })
        })?;

        match &outcome {
            Ok(done) => tracing::info!(
                user,
                from = %done.category_from,
                to = %done.category_to,
                amount = done.amount.value(),
                mode = %self.mode,
                "Transfer applied"
            ),
            Err(e) => tracing::debug!(user, error = %e, "Transfer rejected"),
        }

        outcome
    }
}

fn validate_categories(request: &TransferRequest) -> EnvelopeResult<(&str, &str)> {
    let from = request
        .category_from
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EnvelopeError::InvalidCategory("category_from must be a non-empty string".into()))?;
    let to = request
        .category_to
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EnvelopeError::InvalidCategory("category_to must be a non-empty string".into()))?;

    if from == to {
        return Err(EnvelopeError::InvalidCategory(format!(
            "cannot transfer from '{}' to itself",
            from
        )));
    }

    Ok((from, to))
}
