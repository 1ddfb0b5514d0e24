//! Service layer for envelope-server
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the multi-envelope transfer operation.

pub mod envelope;
pub mod transfer;

pub use envelope::EnvelopeService;
pub use transfer::{TransferMode, TransferOutcome, TransferService};
