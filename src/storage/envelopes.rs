//! In-memory envelope repository
//!
//! Holds every user's envelope set behind a single lock. Operations that touch
//! more than one envelope run inside one write-lock acquisition via
//! [`EnvelopeRepository::write`], so no reader ever sees half of a change.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::EnvelopeError;
use crate::models::{Envelope, EnvelopeSet};

/// All envelope sets, keyed by user identifier
pub type UserEnvelopes = HashMap<String, EnvelopeSet>;

/// Repository for envelope state
#[derive(Debug, Default)]
pub struct EnvelopeRepository {
    users: RwLock<UserEnvelopes>,
}

impl EnvelopeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with data
    pub fn with_data(data: UserEnvelopes) -> Self {
        Self {
            users: RwLock::new(data),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, UserEnvelopes>, EnvelopeError> {
        self.users
            .read()
            .map_err(|e| EnvelopeError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, UserEnvelopes>, EnvelopeError> {
        self.users
            .write()
            .map_err(|e| EnvelopeError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Run a read-only closure against the full store
    pub fn read<R>(&self, f: impl FnOnce(&UserEnvelopes) -> R) -> Result<R, EnvelopeError> {
        let users = self.read_guard()?;
        Ok(f(&users))
    }

    /// Run a mutating closure against the full store under one write lock
    pub fn write<R>(&self, f: impl FnOnce(&mut UserEnvelopes) -> R) -> Result<R, EnvelopeError> {
        let mut users = self.write_guard()?;
        Ok(f(&mut users))
    }

    /// Check whether a user has an envelope set (empty or not)
    pub fn contains_user(&self, user: &str) -> Result<bool, EnvelopeError> {
        self.read(|users| users.contains_key(user))
    }

    /// Get a copy of a user's envelope set
    pub fn get_set(&self, user: &str) -> Result<Option<EnvelopeSet>, EnvelopeError> {
        self.read(|users| users.get(user).cloned())
    }

    /// Insert or replace one envelope, creating the user's set if needed
    pub fn upsert(
        &self,
        user: &str,
        category: &str,
        envelope: Envelope,
    ) -> Result<Option<Envelope>, EnvelopeError> {
        self.write(|users| {
            users
                .entry(user.to_string())
                .or_default()
                .insert(category.to_string(), envelope)
        })
    }

    /// Get the number of known users
    pub fn user_count(&self) -> Result<usize, EnvelopeError> {
        self.read(|users| users.len())
    }

    /// Get the total number of envelopes across all users
    pub fn envelope_count(&self) -> Result<usize, EnvelopeError> {
        self.read(|users| users.values().map(|set| set.len()).sum())
    }

    /// Get a copy of the whole store
    pub fn snapshot(&self) -> Result<UserEnvelopes, EnvelopeError> {
        self.read(|users| users.clone())
    }
}
