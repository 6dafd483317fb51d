//! Provider fallback quotas.
//!
//! When a provider's text cannot be parsed, the pipeline still wants usable
//! numbers for the well-known free providers. The fallback table maps
//! provider-name fragments to default quotas; the first entry whose fragment
//! occurs in the provider name wins.

use crate::Quota;
use modelscout_error::{ConfigError, ConfigErrorKind, ModelScoutResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default quotas for providers whose name contains one of `fragments`.
///
/// # Example
///
/// ```toml
/// [[fallbacks]]
/// name = "OpenRouter"
/// fragments = ["openrouter"]
/// rpm = 20
/// rpd = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackQuota {
    /// Display name of the provider family
    pub name: String,

    /// Case-insensitive substrings of the provider name
    pub fragments: Vec<String>,

    /// Requests per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<u64>,

    /// Requests per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpd: Option<u64>,

    /// Tokens per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpm: Option<u64>,

    /// Tokens per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpd: Option<u64>,
}

impl FallbackQuota {
    fn builtin(name: &str, fragments: &[&str], rpm: u64) -> Self {
        Self {
            name: name.to_string(),
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
            rpm: Some(rpm),
            rpd: None,
            tpm: None,
            tpd: None,
        }
    }

    /// Whether this entry applies to `provider` (case-insensitive).
    pub fn matches(&self, provider: &str) -> bool {
        self.matches_lowercase(&provider.to_lowercase())
    }

    fn matches_lowercase(&self, lowered: &str) -> bool {
        self.fragments
            .iter()
            .any(|fragment| lowered.contains(&fragment.to_lowercase()))
    }
}

impl Quota for FallbackQuota {
    fn rpm(&self) -> Option<u64> {
        self.rpm
    }

    fn rpd(&self) -> Option<u64> {
        self.rpd
    }

    fn tpm(&self) -> Option<u64> {
        self.tpm
    }

    fn tpd(&self) -> Option<u64> {
        self.tpd
    }
}

/// Ordered provider fallback entries.
///
/// The default table covers the free tiers the pipeline scrapes:
///
/// | Fragment | RPM | RPD | TPM |
/// |---|---|---|---|
/// | `groq` | 30 | | 15,000 |
/// | `google`, `gemini` | 15 | | |
/// | `openrouter` | 20 | 50 | |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FallbackTable(Vec<FallbackQuota>);

impl Default for FallbackTable {
    fn default() -> Self {
        Self(vec![
            FallbackQuota {
                tpm: Some(15_000),
                ..FallbackQuota::builtin("Groq", &["groq"], 30)
            },
            FallbackQuota::builtin("Google", &["google", "gemini"], 15),
            FallbackQuota {
                rpd: Some(50),
                ..FallbackQuota::builtin("OpenRouter", &["openrouter"], 20)
            },
        ])
    }
}

impl FallbackTable {
    /// Create a table from entries, keeping their order.
    pub fn new(entries: Vec<FallbackQuota>) -> Self {
        Self(entries)
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[FallbackQuota] {
        &self.0
    }

    /// First entry matching `provider`, if any.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&self, provider: &str) -> Option<&FallbackQuota> {
        let lowered = provider.to_lowercase();
        let entry = self.0.iter().find(|entry| entry.matches_lowercase(&lowered));
        debug!(fallback = entry.map(|e| e.name.as_str()), "Resolved provider fallback");
        entry
    }

    /// Reject entries that could never match, or would match everything.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending entry.
    pub fn validate(&self) -> ModelScoutResult<()> {
        for entry in &self.0 {
            if entry.fragments.is_empty() {
                return Err(ConfigError::new(ConfigErrorKind::InvalidFallback {
                    name: entry.name.clone(),
                    reason: "no provider fragments".to_string(),
                })
                .into());
            }
            if entry.fragments.iter().any(|f| f.trim().is_empty()) {
                return Err(ConfigError::new(ConfigErrorKind::InvalidFallback {
                    name: entry.name.clone(),
                    reason: "empty provider fragment matches every provider".to_string(),
                })
                .into());
            }
        }
        Ok(())
    }
}
