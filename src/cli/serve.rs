//! `serve` command
//!
//! Layers CLI flags over the loaded settings, builds the store and runs the
//! HTTP server until Ctrl+C.

use std::sync::Arc;

use clap::Args;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::server::{self, AppState};
use crate::services::TransferMode;
use crate::storage::initialize_storage;

/// Arguments for the serve command
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides the settings file)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides the settings file and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Start with an empty store instead of the sample envelopes
    #[arg(long)]
    pub no_seed: bool,

    /// Transfer direction: "reference" or "corrected"
    #[arg(long)]
    pub transfer_mode: Option<TransferMode>,
}

impl ServeArgs {
    /// Apply these flags on top of loaded settings
    pub fn apply(&self, mut settings: Settings) -> EnvelopeResult<Settings> {
        if let Some(bind) = &self.bind {
            settings.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if self.no_seed {
            settings.seed_sample_data = false;
        }
        if let Some(mode) = self.transfer_mode {
            settings.transfer_mode = mode;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Handle the serve command
pub async fn handle_serve_command(settings: &Settings) -> EnvelopeResult<()> {
    let storage = Arc::new(initialize_storage(settings.seed_sample_data)?);
    let users = storage.user_count()?;
    let envelopes = storage.envelope_count()?;
    tracing::info!(users, envelopes, "Store initialized");

    let address = settings.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| EnvelopeError::Io(format!("Failed to bind {}: {}", address, e)))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let state = AppState::new(storage, settings.transfer_mode);
    server::serve(listener, state).await?;

    Ok(())
}
