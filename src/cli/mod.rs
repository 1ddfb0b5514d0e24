//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the server and settings.

pub mod config;
pub mod serve;

pub use config::format_config;
pub use serve::{handle_serve_command, ServeArgs};

use std::path::{Path, PathBuf};

use crate::config::{EnvelopePaths, Settings};
use crate::error::EnvelopeResult;

/// Resolve the settings file and load it, applying environment overrides
///
/// An explicit path wins; otherwise the default config directory is used.
pub fn load_settings(explicit: Option<&Path>) -> EnvelopeResult<(PathBuf, Settings)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => EnvelopePaths::new()?.settings_file(),
    };

    let settings = Settings::load_from(&path)?.apply_env()?;
    Ok((path, settings))
}
