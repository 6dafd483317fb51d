//! Recognised rate-limit text layouts and their field patterns.
//!
//! Each provider family writes its limits in its own shape. The layouts are
//! tried in a fixed priority order and the first one whose predicate matches
//! is the only one applied to the text.

use crate::{Quota, parse_magnitude};
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::trace;

/// Known rate-limit text layouts, declared in priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Layout {
    /// `15 requests/min, 1M tokens/min, 200 requests/day`
    CommaSeparated,
    /// `20 requests/min 50/day`
    SlashDay,
    /// `RPM: 30, TPM: 15K, RPD: 14.4K, TPD: 500K`
    Labelled,
}

impl Layout {
    /// Recognition predicate, a case-insensitive substring test on the raw text.
    ///
    /// Predicates overlap (a comma-separated string also mentions
    /// `requests/min`), so on their own they do not decide the layout; use
    /// [`classify`] for that.
    pub fn recognizes(&self, text: &str) -> bool {
        self.recognizes_lowercase(&text.to_lowercase())
    }

    fn recognizes_lowercase(&self, lowered: &str) -> bool {
        match self {
            Layout::CommaSeparated => lowered.contains("requests/min") && lowered.contains(','),
            Layout::SlashDay => lowered.contains("requests/min") && lowered.contains("/day"),
            Layout::Labelled => lowered.contains("rpm:"),
        }
    }
}

/// Pick the highest-priority layout whose predicate matches `text`.
///
/// ```
/// use modelscout_rate_limit::{Layout, classify};
///
/// assert_eq!(classify("10 requests/min, 5/day"), Some(Layout::CommaSeparated));
/// assert_eq!(classify("10 requests/min 5/day"), Some(Layout::SlashDay));
/// assert_eq!(classify("RPM: 10"), Some(Layout::Labelled));
/// assert_eq!(classify("unlimited"), None);
/// ```
pub fn classify(text: &str) -> Option<Layout> {
    let lowered = text.to_lowercase();
    Layout::iter().find(|layout| layout.recognizes_lowercase(&lowered))
}

/// The four quota columns a layout can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum QuotaField {
    /// Requests per minute
    RequestsPerMinute,
    /// Requests per day
    RequestsPerDay,
    /// Tokens per minute
    TokensPerMinute,
    /// Tokens per day
    TokensPerDay,
}

/// How a captured token becomes a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    /// Plain digits
    Integer,
    /// Digits with thousands separators
    GroupedInteger,
    /// Number with optional K/M suffix
    Magnitude,
}

impl ValueKind {
    fn convert(self, raw: &str) -> Option<u64> {
        match self {
            ValueKind::Integer => raw.parse().ok(),
            ValueKind::GroupedInteger => raw.replace(',', "").parse().ok(),
            ValueKind::Magnitude => parse_magnitude(raw),
        }
    }
}

/// One field extraction: the first match of `pattern` feeds `field`.
#[derive(Debug, Clone)]
struct FieldPattern {
    field: QuotaField,
    pattern: Regex,
    kind: ValueKind,
}

impl FieldPattern {
    fn new(field: QuotaField, pattern: &str, kind: ValueKind) -> Self {
        Self {
            field,
            // Patterns are literals below.
            pattern: Regex::new(pattern).expect("Valid rate limit pattern"),
            kind,
        }
    }

    fn extract(&self, text: &str) -> Option<u64> {
        let raw = self.pattern.captures(text)?.get(1)?.as_str();
        let value = self.kind.convert(raw);
        trace!(field = %self.field, raw, ?value, "Matched field pattern");
        value
    }
}

/// A layout together with the patterns that extract its fields.
#[derive(Debug, Clone)]
pub(crate) struct LayoutRule {
    layout: Layout,
    fields: Vec<FieldPattern>,
}

impl LayoutRule {
    /// Compile the extraction patterns for `layout`.
    pub(crate) fn new(layout: Layout) -> Self {
        use QuotaField::*;
        use ValueKind::*;

        // ASCII digit classes only: `\d` would accept digits that the
        // integer conversions below reject.
        const MAGNITUDE: &str = r"([0-9.]+[km]?)";

        let fields = match layout {
            Layout::CommaSeparated => vec![
                FieldPattern::new(RequestsPerMinute, r"(?i)([0-9]+)\s*requests/min", Integer),
                FieldPattern::new(
                    TokensPerMinute,
                    &format!(r"(?i){MAGNITUDE}\s*tokens/min"),
                    Magnitude,
                ),
                FieldPattern::new(RequestsPerDay, r"(?i)([0-9,]+)\s*requests/day", GroupedInteger),
            ],
            Layout::SlashDay => vec![
                FieldPattern::new(RequestsPerMinute, r"(?i)([0-9]+)\s*requests/min", Integer),
                FieldPattern::new(RequestsPerDay, r"(?i)([0-9]+)\s*/day", Integer),
            ],
            Layout::Labelled => vec![
                FieldPattern::new(RequestsPerMinute, r"(?i)rpm:\s*([0-9]+)", Integer),
                FieldPattern::new(TokensPerMinute, &format!(r"(?i)tpm:\s*{MAGNITUDE}"), Magnitude),
                FieldPattern::new(RequestsPerDay, &format!(r"(?i)rpd:\s*{MAGNITUDE}"), Magnitude),
                FieldPattern::new(TokensPerDay, &format!(r"(?i)tpd:\s*{MAGNITUDE}"), Magnitude),
            ],
        };

        Self { layout, fields }
    }

    /// Rules for every layout, in priority order.
    pub(crate) fn all() -> Vec<Self> {
        Layout::iter().map(Self::new).collect()
    }

    pub(crate) fn layout(&self) -> Layout {
        self.layout
    }

    pub(crate) fn matches_lowercase(&self, lowered: &str) -> bool {
        self.layout.recognizes_lowercase(lowered)
    }

    /// Run every field pattern of this layout over `text`.
    pub(crate) fn extract(&self, text: &str) -> ExtractedFields {
        let mut extracted = ExtractedFields::default();
        for pattern in &self.fields {
            let value = pattern.extract(text);
            match pattern.field {
                QuotaField::RequestsPerMinute => extracted.requests_per_minute = value,
                QuotaField::RequestsPerDay => extracted.requests_per_day = value,
                QuotaField::TokensPerMinute => extracted.tokens_per_minute = value,
                QuotaField::TokensPerDay => extracted.tokens_per_day = value,
            }
        }
        extracted
    }
}

/// Values pulled out of one text by one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ExtractedFields {
    pub(crate) requests_per_minute: Option<u64>,
    pub(crate) requests_per_day: Option<u64>,
    pub(crate) tokens_per_minute: Option<u64>,
    pub(crate) tokens_per_day: Option<u64>,
}

impl Quota for ExtractedFields {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_layout_strips_thousands_separators_from_daily_requests() {
        let rule = LayoutRule::new(Layout::CommaSeparated);
        let fields = rule.extract("30 requests/min, 1,000 requests/day");
        assert_eq!(fields.requests_per_minute, Some(30));
        assert_eq!(fields.requests_per_day, Some(1_000));
        assert_eq!(fields.tokens_per_minute, None);
        assert_eq!(fields.tokens_per_day, None);
    }

    #[test]
    fn slash_day_layout_ignores_token_counts() {
        let rule = LayoutRule::new(Layout::SlashDay);
        let fields = rule.extract("20 requests/min 50/day 40K tokens/min");
        assert_eq!(fields.requests_per_minute, Some(20));
        assert_eq!(fields.requests_per_day, Some(50));
        assert_eq!(fields.tokens_per_minute, None);
    }

    #[test]
    fn labelled_layout_is_case_insensitive() {
        let rule = LayoutRule::new(Layout::Labelled);
        let fields = rule.extract("rpm: 60 | Tpm: 1.5m | rPd: 2k");
        assert_eq!(fields.requests_per_minute, Some(60));
        assert_eq!(fields.tokens_per_minute, Some(1_500_000));
        assert_eq!(fields.requests_per_day, Some(2_000));
        assert_eq!(fields.tokens_per_day, None);
    }

    #[test]
    fn non_ascii_digits_are_not_captured() {
        let rule = LayoutRule::new(Layout::Labelled);
        let fields = rule.extract("RPM: ٣٠, RPM: 30, TPM: ٣K, TPM: 3K");
        assert_eq!(fields.requests_per_minute, Some(30));
        assert_eq!(fields.tokens_per_minute, Some(3_000));

        let rule = LayoutRule::new(Layout::SlashDay);
        let fields = rule.extract("١٥ requests/min 15 requests/min 50/day");
        assert_eq!(fields.requests_per_minute, Some(15));
        assert_eq!(fields.requests_per_day, Some(50));
    }

    #[test]
    fn first_match_wins() {
        let rule = LayoutRule::new(Layout::Labelled);
        let fields = rule.extract("RPM: 5, RPM: 10");
        assert_eq!(fields.requests_per_minute, Some(5));
    }

    #[test]
    fn rules_follow_priority_order() {
        let layouts: Vec<Layout> = LayoutRule::all().iter().map(LayoutRule::layout).collect();
        assert_eq!(
            layouts,
            vec![Layout::CommaSeparated, Layout::SlashDay, Layout::Labelled]
        );
    }
}
