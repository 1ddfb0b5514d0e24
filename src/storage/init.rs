//! Storage initialization
//!
//! Handles startup seeding with sample envelope data

use crate::error::EnvelopeError;
use crate::models::{Amount, Envelope, EnvelopeSet};

use super::envelopes::{EnvelopeRepository, UserEnvelopes};

/// User that owns the sample envelopes
pub const SAMPLE_USER: &str = "user1";

/// Build the sample data set: `user1` with `food` and `clothes` envelopes
pub fn sample_data() -> UserEnvelopes {
    let defaults = [("food", 200.0), ("clothes", 100.0)];

    let mut set = EnvelopeSet::new();
    for (category, budget) in defaults {
        set.insert(category.to_string(), Envelope::new(Amount::new(budget).unwrap_or_default()));
    }

    let mut data = UserEnvelopes::new();
    data.insert(SAMPLE_USER.to_string(), set);
    data
}

/// Initialize the store for a fresh process
///
/// Seeds the sample data when requested; otherwise the store starts empty.
pub fn initialize_storage(seed_sample_data: bool) -> Result<EnvelopeRepository, EnvelopeError> {
    if !seed_sample_data {
        return Ok(EnvelopeRepository::new());
    }

    let repo = EnvelopeRepository::with_data(sample_data());
    let envelopes = repo.envelope_count()?;
    tracing::debug!(user = SAMPLE_USER, envelopes, "Seeded sample envelopes");

    Ok(repo)
}
