//! Configuration module for envelope-server
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution for the settings file
//! - Server settings persistence and environment overrides

pub mod paths;
pub mod settings;

pub use paths::EnvelopePaths;
pub use settings::Settings;
