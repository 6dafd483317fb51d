//! The rate-limit parser.

use crate::layout::LayoutRule;
use crate::{FallbackTable, ModelScoutConfig, NormalizedRateLimit, Quota, RawRateLimitInput};
use tracing::{debug, instrument};

/// Converts provider rate-limit text into [`NormalizedRateLimit`] records.
///
/// The parser owns its compiled layout patterns and fallback table and holds
/// no other state, so one instance can be shared by reference across threads
/// for a whole batch.
///
/// Parsing goes through these states:
/// 1. empty or absent text goes straight to the fallback table;
/// 2. otherwise the first layout whose predicate matches is selected;
/// 3. its fields are extracted, and the record is returned as parsed if a
///    requests-per-minute value came out;
/// 4. anything else resolves through the fallback table, which replaces all
///    four values and marks the record as not parseable.
///
/// A layout that matches but yields no requests-per-minute value does not
/// hand over to the next layout.
///
/// # Example
///
/// ```
/// use modelscout_rate_limit::{Quota, RateLimitParser};
///
/// let parser = RateLimitParser::default();
///
/// let limit = parser.parse(Some("RPM: 30, TPM: 15K, RPD: 14.4K, TPD: 500K"), "groq");
/// assert_eq!(limit.rpd(), Some(14_400));
/// assert!(*limit.parseable());
///
/// let limit = parser.parse(None, "Groq-Instant");
/// assert_eq!(limit.rpm(), Some(30));
/// assert!(!*limit.parseable());
/// ```
#[derive(Debug, Clone)]
pub struct RateLimitParser {
    rules: Vec<LayoutRule>,
    fallbacks: FallbackTable,
}

impl Default for RateLimitParser {
    fn default() -> Self {
        Self::new(FallbackTable::default())
    }
}

impl RateLimitParser {
    /// Create a parser with the given fallback table.
    pub fn new(fallbacks: FallbackTable) -> Self {
        Self {
            rules: LayoutRule::all(),
            fallbacks,
        }
    }

    /// Create a parser using the fallback table from `config`.
    pub fn from_config(config: &ModelScoutConfig) -> Self {
        Self::new(config.fallbacks.clone())
    }

    /// Normalize one provider description.
    #[instrument(level = "debug", skip(self, text), fields(text_len = text.map(str::len)))]
    pub fn parse(&self, text: Option<&str>, provider: &str) -> NormalizedRateLimit {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("No rate limit text, using provider fallback");
                return self.resolve_fallback(provider);
            }
        };

        let lowered = text.to_lowercase();
        let Some(rule) = self.rules.iter().find(|rule| rule.matches_lowercase(&lowered)) else {
            debug!("Text matches no known layout, using provider fallback");
            return self.resolve_fallback(provider);
        };

        let extracted = rule.extract(text);
        if extracted.rpm().is_none() {
            debug!(layout = %rule.layout(), "Layout yielded no requests per minute, using provider fallback");
            return self.resolve_fallback(provider);
        }

        debug!(layout = %rule.layout(), ?extracted, "Parsed rate limit text");
        NormalizedRateLimit::from_quota(&extracted, true)
    }

    /// Normalize a [`RawRateLimitInput`].
    pub fn parse_input(&self, input: &RawRateLimitInput) -> NormalizedRateLimit {
        self.parse(input.text.as_deref(), &input.provider)
    }

    /// Fallback record for `provider`, all values absent when no entry matches.
    pub fn resolve_fallback(&self, provider: &str) -> NormalizedRateLimit {
        match self.fallbacks.resolve(provider) {
            Some(entry) => NormalizedRateLimit::from_quota(entry, false),
            None => NormalizedRateLimit::default(),
        }
    }
}
