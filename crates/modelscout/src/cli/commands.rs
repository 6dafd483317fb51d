//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// modelscout - normalize provider rate-limit text into numeric quotas
#[derive(Parser, Debug)]
#[command(name = "modelscout")]
#[command(about = "Normalize provider rate-limit text into numeric quotas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./modelscout.toml, then ~/.config/modelscout/)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a single rate-limit description
    Parse {
        /// Provider the text belongs to
        #[arg(long)]
        provider: String,

        /// Rate-limit text (omit to see the provider fallback)
        #[arg(long)]
        text: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Normalize the rate limits of every row in a JSON staging file
    Normalize {
        /// JSON array of model rows
        #[arg(long)]
        input: PathBuf,

        /// Where to write the normalized rows
        #[arg(long)]
        output: PathBuf,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
