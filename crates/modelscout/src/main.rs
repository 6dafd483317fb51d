//! modelscout CLI binary.
//!
//! - Parse a single provider rate-limit string
//! - Normalize the rate limits of a JSON staging file

use clap::Parser;
use modelscout::cli::{Cli, Commands, handle_normalize, handle_parse, load_config};
use modelscout::telemetry::init_console_telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG may be set from a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_console_telemetry(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse {
            provider,
            text,
            format,
        } => {
            handle_parse(&config, text.as_deref(), &provider, format)?;
        }

        Commands::Normalize { input, output } => {
            handle_normalize(&config, &input, &output).await?;
        }
    }

    Ok(())
}
