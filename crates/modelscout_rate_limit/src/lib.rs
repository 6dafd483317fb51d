//! Rate-limit text normalization.
//!
//! Providers describe their quotas as free-form text ("15 requests/min, 1M
//! tokens/min, 200 requests/day", "RPM: 30, TPM: 15K, ..."). This crate turns
//! such strings into a [`NormalizedRateLimit`] with four numeric quota fields.
//!
//! Parsing runs in three steps:
//! - the text is classified into one of the known [`Layout`]s, in fixed priority
//! - the fields of that layout are extracted, with magnitude suffixes expanded
//! - when nothing usable comes out, the provider's [`FallbackQuota`] applies
//!
//! Parsing never fails. Unrecognised text yields a record with
//! `parseable = false`.
//!
//! ```
//! use modelscout_rate_limit::{Quota, RateLimitParser};
//!
//! let parser = RateLimitParser::default();
//! let limit = parser.parse(Some("20 requests/min 50/day"), "openrouter");
//! assert_eq!(limit.rpm(), Some(20));
//! assert_eq!(limit.rpd(), Some(50));
//! assert!(*limit.parseable());
//! ```

mod config;
mod fallback;
mod layout;
mod parser;
mod quota;
mod stage;
mod value;

pub use config::ModelScoutConfig;
pub use fallback::{FallbackQuota, FallbackTable};
pub use layout::{Layout, classify};
pub use parser::RateLimitParser;
pub use quota::{NormalizedRateLimit, Quota, RawRateLimitInput};
pub use stage::{ModelRecord, StageSummary, read_records, write_records};
pub use value::parse_magnitude;
