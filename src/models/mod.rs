//! Core data models for envelope-server
//!
//! This module contains the data structures that represent the envelope
//! domain: validated amounts, envelopes, and the loosely-typed request inputs
//! that feed the service layer.

pub mod amount;
pub mod envelope;
pub mod request;

pub use amount::{Amount, AmountError};
pub use envelope::{Envelope, EnvelopeSet, EnvelopeValidationError};
pub use request::{BudgetInput, EnvelopePatch, TransferRequest};
