//! modelscout - rate-limit normalization for AI model metadata.
//!
//! The metadata pipeline scrapes model listings from several inference
//! providers. Each listing carries a free-form rate-limit description; this
//! crate turns those descriptions into four numeric quotas that can be stored
//! alongside the model.
//!
//! # Quick Start
//!
//! ```
//! use modelscout::{Quota, RateLimitParser};
//!
//! let parser = RateLimitParser::default();
//! let limit = parser.parse(Some("15 requests/min, 1M tokens/min, 200 requests/day"), "google");
//!
//! assert_eq!(limit.rpm(), Some(15));
//! assert_eq!(limit.tpm(), Some(1_000_000));
//! assert_eq!(limit.rpd(), Some(200));
//! ```
//!
//! # Architecture
//!
//! - `modelscout_error` - Error types
//! - `modelscout_rate_limit` - Parser, fallback table, configuration, staging files
//! - `modelscout` - This facade plus the `modelscout` command-line tool
//!
//! This crate re-exports everything for convenience.

pub mod cli;
pub mod telemetry;

pub use modelscout_error::{
    ConfigError, ConfigErrorKind, JsonError, JsonErrorKind, ModelScoutError, ModelScoutErrorKind,
    ModelScoutResult, StageError, StageErrorKind,
};
pub use modelscout_rate_limit::{
    FallbackQuota, FallbackTable, Layout, ModelRecord, ModelScoutConfig, NormalizedRateLimit,
    Quota, RateLimitParser, RawRateLimitInput, StageSummary, classify, parse_magnitude,
    read_records, write_records,
};
