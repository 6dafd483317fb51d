//! Staging file normalize command.

use modelscout_error::ModelScoutResult;
use modelscout_rate_limit::{
    ModelScoutConfig, RateLimitParser, StageSummary, read_records, write_records,
};
use std::path::Path;
use tracing::{info, instrument};

/// Normalize every row of `input` and write the result to `output`.
#[instrument(skip(config, input, output), fields(input = %input.display(), output = %output.display()))]
pub async fn handle_normalize(
    config: &ModelScoutConfig,
    input: &Path,
    output: &Path,
) -> ModelScoutResult<StageSummary> {
    let parser = RateLimitParser::from_config(config);

    let mut rows = read_records(input).await?;
    let summary = parser.normalize_records(&mut rows);
    write_records(output, &rows).await?;

    info!(rows = summary.total, "Wrote normalized staging file");
    Ok(summary)
}
