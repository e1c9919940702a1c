// src/cli.rs

//! CLI definitions for addonsmith
//!
//! Command-line interface built with clap. The actual command
//! implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addonsmith")]
#[command(author, version)]
#[command(
    about = "Convert recipe text files to Minecraft Bedrock JSON",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a recipe text file to Bedrock recipe JSON
    Convert {
        /// Path to the recipe text file
        input: PathBuf,

        /// Template .mcaddon archive to clone with the recipe injected
        #[arg(long)]
        addon: Option<PathBuf>,

        /// Validate the recipe without writing any output
        #[arg(long)]
        check: bool,
    },

    /// Show the packs and content of an .mcaddon archive
    Inspect {
        /// Path to the .mcaddon archive
        addon: PathBuf,
    },
}
