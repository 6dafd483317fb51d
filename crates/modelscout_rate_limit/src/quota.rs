//! Quota records produced by the parser.

use serde::{Deserialize, Serialize};

/// Read access to the four quota values a provider can publish.
///
/// All methods return `Option<u64>` where `None` means the limit is unknown
/// or not published.
///
/// # Example
///
/// ```
/// use modelscout_rate_limit::Quota;
///
/// struct FreeTier;
///
/// impl Quota for FreeTier {
///     fn rpm(&self) -> Option<u64> { Some(10) }
///     fn rpd(&self) -> Option<u64> { Some(250) }
///     fn tpm(&self) -> Option<u64> { Some(250_000) }
///     fn tpd(&self) -> Option<u64> { None }
/// }
///
/// assert!(!FreeTier.is_empty());
/// ```
pub trait Quota: Send + Sync {
    /// Requests per minute limit.
    fn rpm(&self) -> Option<u64>;

    /// Requests per day limit.
    fn rpd(&self) -> Option<u64>;

    /// Tokens per minute limit.
    fn tpm(&self) -> Option<u64>;

    /// Tokens per day limit.
    fn tpd(&self) -> Option<u64>;

    /// True when no limit at all is known.
    fn is_empty(&self) -> bool {
        self.rpm().is_none() && self.rpd().is_none() && self.tpm().is_none() && self.tpd().is_none()
    }
}

/// Raw rate-limit description attached to a model row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_new::new)]
pub struct RawRateLimitInput {
    /// Free-form provider text, possibly absent or empty
    #[serde(default)]
    pub text: Option<String>,

    /// Provider name, matched case-insensitively against fallback fragments
    #[serde(default)]
    pub provider: String,
}

/// Normalized rate limits for one model.
///
/// `parseable` is true when the values were read from the provider's text,
/// false when they came from the provider fallback table (or nothing was
/// known at all). Fallback values are never mixed with parsed ones.
///
/// Records are built by [`RateLimitParser`](crate::RateLimitParser) and are
/// read-only afterwards.
///
/// # Example
///
/// ```
/// use modelscout_rate_limit::{NormalizedRateLimit, Quota};
///
/// let limit = NormalizedRateLimit::new(Some(15), Some(200), Some(1_000_000), None, true);
/// assert_eq!(limit.tpm(), Some(1_000_000));
/// assert_eq!(*limit.tokens_per_day(), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct NormalizedRateLimit {
    /// Requests per minute
    #[serde(default)]
    requests_per_minute: Option<u64>,

    /// Requests per day
    #[serde(default)]
    requests_per_day: Option<u64>,

    /// Tokens per minute
    #[serde(default)]
    tokens_per_minute: Option<u64>,

    /// Tokens per day
    #[serde(default)]
    tokens_per_day: Option<u64>,

    /// Whether the values were extracted from text
    #[serde(default)]
    parseable: bool,
}

impl NormalizedRateLimit {
    /// Copy all four values from `quota`.
    pub(crate) fn from_quota(quota: &dyn Quota, parseable: bool) -> Self {
        Self {
            requests_per_minute: quota.rpm(),
            requests_per_day: quota.rpd(),
            tokens_per_minute: quota.tpm(),
            tokens_per_day: quota.tpd(),
            parseable,
        }
    }
}

impl Quota for NormalizedRateLimit {
    fn rpm(&self) -> Option<u64> {
        self.requests_per_minute
    }

    fn rpd(&self) -> Option<u64> {
        self.requests_per_day
    }

    fn tpm(&self) -> Option<u64> {
        self.tokens_per_minute
    }

    fn tpd(&self) -> Option<u64> {
        self.tokens_per_day
    }
}
