use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use envelope::cli::{format_config, handle_serve_command, load_settings, ServeArgs};
use envelope::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "envelope-server",
    author = "Kaylee Beyene",
    version,
    about = "In-memory budget envelope service",
    long_about = "envelope-server keeps per-user budget envelopes in memory and \
                  exposes them over HTTP: list, create, update, delete and \
                  transfer between a user's envelopes."
)]
struct Cli {
    /// Path to the settings file (defaults to the config directory)
    #[arg(long, global = true, env = "ENVELOPE_SERVER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeArgs),

    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings_path, settings) = load_settings(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Config => {
            print!("{}", format_config(&settings_path, &settings));
        }
        Commands::Serve(args) => {
            let settings = args.apply(settings)?;
            init_logging(&settings.log_filter);
            tracing::info!(settings_file = %settings_path.display(), "envelope-server starting");
            handle_serve_command(&settings).await?;
        }
    }

    Ok(())
}
