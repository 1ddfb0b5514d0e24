//! Server settings for envelope-server
//!
//! Manages the listening address, startup seeding, transfer direction and
//! log filter. Values come from defaults, then the settings file, then the
//! `PORT` environment variable; CLI flags are layered on top by the caller.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EnvelopeError;
use crate::services::TransferMode;

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";

/// Server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to seed the sample `user1` envelopes at startup
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Direction transfers apply their amount in
    #[serde(default)]
    pub transfer_mode: TransferMode,

    /// Default tracing filter, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_log_filter() -> String {
    "envelope=info,envelope_server=info,tower_http=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            bind_address: default_bind_address(),
            port: default_port(),
            seed_sample_data: default_seed_sample_data(),
            transfer_mode: TransferMode::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from a specific file, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, EnvelopeError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| EnvelopeError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            EnvelopeError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Apply the `PORT` environment variable, if set
    pub fn apply_env(self) -> Result<Self, EnvelopeError> {
        let port = std::env::var(PORT_ENV).ok();
        self.with_port_override(port.as_deref())
    }

    /// Apply a raw port override; `None` or an empty string leaves the port unchanged
    pub fn with_port_override(mut self, raw: Option<&str>) -> Result<Self, EnvelopeError> {
        if let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) {
            self.port = raw.parse().map_err(|_| {
                EnvelopeError::Config(format!("{} must be a port number, got '{}'", PORT_ENV, raw))
            })?;
        }
        Ok(self)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        if self.bind_address.trim().is_empty() {
            return Err(EnvelopeError::Config("bind_address cannot be empty".into()));
        }

        if self.log_filter.trim().is_empty() {
            return Err(EnvelopeError::Config("log_filter cannot be empty".into()));
        }

        Ok(())
    }

    /// The `host:port` string the server binds to
    pub fn listen_address(&self) -> String {
        let host = self.bind_address.trim();
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}
