//! `config` command
//!
//! Prints where settings are read from and the values in effect.

use std::path::Path;

use crate::config::settings::PORT_ENV;
use crate::config::Settings;

/// Format the resolved configuration for terminal output
pub fn format_config(settings_path: &Path, settings: &Settings) -> String {
    let file_state = if settings_path.exists() {
        "loaded"
    } else {
        "not found, using defaults"
    };

    let mut output = String::new();
    output.push_str("envelope-server configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!(
        "Settings file: {} ({})\n",
        settings_path.display(),
        file_state
    ));
    output.push('\n');
    output.push_str(&format!("  Listen address:   {}\n", settings.listen_address()));
    output.push_str(&format!("  Seed sample data: {}\n", settings.seed_sample_data));
    output.push_str(&format!("  Transfer mode:    {}\n", settings.transfer_mode));
    output.push_str(&format!("  Log filter:       {}\n", settings.log_filter));
    output.push('\n');
    output.push_str(&format!(
        "{} and RUST_LOG override the file when set.\n",
        PORT_ENV
    ));
    output
}
