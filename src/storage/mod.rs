//! Storage layer for envelope-server
//!
//! All state lives in memory for the lifetime of the process. There is no
//! persistence; a restart starts from the seeded (or empty) store again.

pub mod envelopes;
pub mod init;

pub use envelopes::{EnvelopeRepository, UserEnvelopes};
pub use init::{initialize_storage, sample_data, SAMPLE_USER};
