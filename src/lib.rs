//! envelope-server - In-memory budget envelopes over HTTP
//!
//! This library provides the core functionality for envelope-server. Each
//! user owns a set of envelopes, one per spending category, each holding a
//! budget and the amount spent against it. Envelopes can be listed, created,
//! partially updated, deleted, and budget can be transferred between two
//! envelopes of the same user.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and path management
//! - `error`: Custom error types
//! - `models`: Amounts, envelopes and request inputs
//! - `storage`: The in-memory envelope store
//! - `services`: Business logic layer
//! - `server`: axum HTTP adapter
//! - `cli`: Command handlers for the binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use envelope::services::{EnvelopeService, TransferService};
//! use envelope::models::TransferRequest;
//! use envelope::storage::initialize_storage;
//!
//! let storage = initialize_storage(true)?;
//! let envelopes = EnvelopeService::new(&storage);
//! envelopes.create_or_replace("user1", "rent", Some(900.0))?;
//!
//! TransferService::new(&storage)
//!     .transfer("user1", &TransferRequest::new("food", "clothes", 50.0))?;
//! # Ok::<(), envelope::EnvelopeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;

pub use error::EnvelopeError;
