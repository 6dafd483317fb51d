//! JSON staging files of model rows.
//!
//! Pipeline stages hand model metadata to each other as JSON arrays of
//! objects. This module reads such a file, fills in the normalized quota of
//! every row, and writes the rows back. Fields it does not know about are
//! carried through unchanged.

use crate::{NormalizedRateLimit, Quota, RateLimitParser};
use modelscout_error::{JsonError, JsonErrorKind, ModelScoutResult, StageError, StageErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One model row in a staging file.
///
/// ```
/// use modelscout_rate_limit::ModelRecord;
///
/// let row: ModelRecord = serde_json::from_str(
///     r#"{"model_id": "llama-3.1-8b", "provider": "groq", "rate_limits": "RPM: 30"}"#,
/// ).unwrap();
/// assert_eq!(row.provider.as_deref(), Some("groq"));
/// assert!(row.extra.contains_key("model_id"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Inference provider name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Raw provider rate-limit text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limits: Option<String>,

    /// Normalized quota, filled in by [`RateLimitParser::normalize_records`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<NormalizedRateLimit>,

    /// Every other column of the row
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Counts from one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageSummary {
    /// Rows processed
    pub total: usize,
    /// Rows whose quota was read from text
    pub parsed: usize,
    /// Rows that took provider fallback values
    pub fallback: usize,
    /// Rows with no quota information at all
    pub unresolved: usize,
}

impl StageSummary {
    fn record(&mut self, quota: &NormalizedRateLimit) {
        self.total += 1;
        if *quota.parseable() {
            self.parsed += 1;
        } else if quota.is_empty() {
            self.unresolved += 1;
        } else {
            self.fallback += 1;
        }
    }
}

impl RateLimitParser {
    /// Fill in `quota` for every row, replacing any previous value.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn normalize_records(&self, rows: &mut [ModelRecord]) -> StageSummary {
        let mut summary = StageSummary::default();
        for row in rows.iter_mut() {
            let provider = row.provider.as_deref().unwrap_or_default();
            let quota = self.parse(row.rate_limits.as_deref(), provider);
            summary.record(&quota);
            row.quota = Some(quota);
        }

        info!(
            total = summary.total,
            parsed = summary.parsed,
            fallback = summary.fallback,
            unresolved = summary.unresolved,
            "Normalized rate limits"
        );
        summary
    }
}

/// Read a JSON array of model rows.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of objects.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn read_records(path: impl AsRef<Path>) -> ModelScoutResult<Vec<ModelRecord>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        StageError::new(StageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;

    let rows: Vec<ModelRecord> = serde_json::from_slice(&bytes)
        .map_err(|e| {
        JsonError::new(JsonErrorKind::MalformedRows(format!("{}: {}", path.display(), e)))
    })?;

    debug!(rows = rows.len(), "Read staging file");
    Ok(rows)
}

/// Write model rows as a pretty-printed JSON array.
///
/// Creates the parent directory if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
#[instrument(skip(path, rows), fields(path = %path.as_ref().display(), rows = rows.len()))]
pub async fn write_records(path: impl AsRef<Path>, rows: &[ModelRecord]) -> ModelScoutResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StageError::new(StageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let json = serde_json::to_vec_pretty(rows)
        .map_err(|e| JsonError::new(JsonErrorKind::Encode(e.to_string())))?;

    tokio::fs::write(path, json).await.map_err(|e| {
        StageError::new(StageErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
    })?;

    debug!("Wrote staging file");
    Ok(())
}
