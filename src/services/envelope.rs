//! Envelope service
//!
//! Provides business logic for envelope management: listing, lookup,
//! create-or-replace, partial updates and deletion. Every operation runs under
//! a single lock acquisition on the repository.

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::{Amount, Envelope, EnvelopePatch, EnvelopeSet};
use crate::storage::EnvelopeRepository;

/// Service for envelope management
pub struct EnvelopeService<'a> {
    storage: &'a EnvelopeRepository,
}

impl<'a> EnvelopeService<'a> {
    /// Create a new envelope service
    pub fn new(storage: &'a EnvelopeRepository) -> Self {
        Self { storage }
    }

    /// List every envelope of a user
    pub fn list_envelopes(&self, user: &str) -> EnvelopeResult<EnvelopeSet> {
        self.storage
            .get_set(user)?
            .ok_or_else(|| EnvelopeError::user_not_found(user))
    }

    /// Get one envelope of a user
    pub fn get_envelope(&self, user: &str, category: &str) -> EnvelopeResult<Envelope> {
        self.storage.read(|users| {
            let set = users
                .get(user)
                .ok_or_else(|| EnvelopeError::user_not_found(user))?;

            set.get(category)
                .copied()
                .ok_or_else(|| EnvelopeError::category_not_found(user, category))
        })?
    }

    /// Create an envelope, replacing any existing envelope of the same category
    ///
    /// The budget is validated before anything is written, so a rejected call
    /// never creates the user.
    pub fn create_or_replace(
        &self,
        user: &str,
        category: &str,
        budget: Option<f64>,
    ) -> EnvelopeResult<Envelope> {
        let budget = budget
            .ok_or_else(|| EnvelopeError::InvalidBudget("budget must be a number".into()))
            .and_then(|raw| {
                Amount::new(raw).map_err(|e| EnvelopeError::InvalidBudget(e.to_string()))
            })
            .inspect_err(|e| tracing::debug!(user, category, error = %e, "Create rejected"))?;

        let envelope = Envelope::new(budget);
        let replaced = self.storage.upsert(user, category, envelope)?;

        tracing::info!(
            user,
            category,
            budget = envelope.budget,
            replaced = replaced.is_some(),
            "Envelope created"
        );

        Ok(envelope)
    }

    /// Apply a partial update to an envelope
    ///
    /// A valid budget is applied first. A numeric spending must not exceed the
    /// budget in effect after that step; if it does, the call fails with
    /// `InvalidSpending` and the already-applied budget stays in place. Fields
    /// that are absent or were not numbers are ignored, as is a budget that is
    /// not a valid amount.
    pub fn update_envelope(
        &self,
        user: &str,
        category: &str,
        patch: &EnvelopePatch,
    ) -> EnvelopeResult<Envelope> {
        self.storage.write(|users| {
            let set = users
                .get_mut(user)
                .ok_or_else(|| EnvelopeError::user_not_found(user))?;
            let envelope = set
                .get_mut(category)
                .ok_or_else(|| EnvelopeError::category_not_found(user, category))?;

            if let Some(raw) = patch.budget {
                match Amount::new(raw) {
                    Ok(budget) => {
                        let mut updated = *envelope;
                        updated.set_budget(budget);
                        // Without a spending field nothing else re-checks the pair
                        if patch.spending.is_none() {
                            updated
                                .validate()
                                .map_err(|e| EnvelopeError::InvalidBudget(e.to_string()))?;
                        }
                        *envelope = updated;
                    }
                    Err(e) => {
                        tracing::debug!(user, category, error = %e, "Ignoring invalid budget");
                    }
                }
            }

            if let Some(raw) = patch.spending {
                let spending =
                    Amount::new(raw).map_err(|e| EnvelopeError::InvalidSpending(e.to_string()))?;

                let mut updated = *envelope;
                updated.set_spending(spending);
                updated
                    .validate()
                    .map_err(|e| EnvelopeError::InvalidSpending(e.to_string()))?;
                *envelope = updated;
            }

            tracing::info!(
                user,
                category,
                budget = envelope.budget,
                spending = envelope.spending,
                "Envelope updated"
            );

            Ok(*envelope)
        })?
    }

    /// Delete an envelope, returning what was removed
    ///
    /// The user stays known even when this removes their last envelope.
    pub fn delete_envelope(&self, user: &str, category: &str) -> EnvelopeResult<Envelope> {
        let removed = self.storage.write(|users| {
            let set = users
                .get_mut(user)
                .ok_or_else(|| EnvelopeError::user_not_found(user))?;

            set.remove(category)
                .ok_or_else(|| EnvelopeError::category_not_found(user, category))
        })??;

        tracing::info!(user, category, "Envelope deleted");

        Ok(removed)
    }
}
