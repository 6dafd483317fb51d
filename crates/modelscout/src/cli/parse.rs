//! Single-string parse command.

use super::OutputFormat;
use modelscout_error::{JsonError, JsonErrorKind, ModelScoutResult};
use modelscout_rate_limit::{ModelScoutConfig, NormalizedRateLimit, Quota, RateLimitParser};
use tracing::instrument;

/// Parse one rate-limit description and print the result.
#[instrument(skip(config, text))]
pub fn handle_parse(
    config: &ModelScoutConfig,
    text: Option<&str>,
    provider: &str,
    format: OutputFormat,
) -> ModelScoutResult<()> {
    let parser = RateLimitParser::from_config(config);
    let limit = parser.parse(text, provider);
    println!("{}", render_limit(&limit, format)?);
    Ok(())
}

/// Format a normalized record for display.
pub fn render_limit(limit: &NormalizedRateLimit, format: OutputFormat) -> ModelScoutResult<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(limit)
                .map_err(|e| JsonError::new(JsonErrorKind::Encode(e.to_string())))?;
            Ok(json)
        }
        OutputFormat::Human => {
            let source = if *limit.parseable() {
                "parsed from text"
            } else if limit.is_empty() {
                "unknown"
            } else {
                "provider fallback"
            };

            let lines = [
                ("Requests/min", limit.rpm()),
                ("Requests/day", limit.rpd()),
                ("Tokens/min", limit.tpm()),
                ("Tokens/day", limit.tpd()),
            ]
            .iter()
            .map(|(label, value)| {
                let value = value.map_or_else(|| "-".to_string(), |v| v.to_string());
                format!("  {:<13} {}", label, value)
            })
            .collect::<Vec<_>>()
            .join("\n");

            Ok(format!("Rate limits ({}):\n{}", source, lines))
        }
    }
}
