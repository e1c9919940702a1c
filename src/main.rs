// src/main.rs

mod cli;
mod commands;

use addonsmith::Error;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            addon,
            check,
        } => commands::cmd_convert(&input, addon.as_deref(), check),
        Commands::Inspect { addon } => commands::cmd_inspect(&addon),
    };

    if let Err(err) = result {
        // Recognized failures carry an actionable message and exit 1;
        // anything else is unexpected and exits 2
        match err.downcast_ref::<Error>() {
            Some(recognized) if recognized.is_recognized() => {
                eprintln!("Error: {err:#}");
                std::process::exit(1);
            }
            _ => {
                eprintln!("Unexpected error: {err:#}");
                std::process::exit(2);
            }
        }
    }
}
