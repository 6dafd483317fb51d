//! Configuration error types.

/// What went wrong while loading the fallback configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to read configuration: {}", _0)]
    Read(String),
    /// The merged configuration does not match the expected schema
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A fallback entry could never match, or would match every provider
    #[display("Invalid fallback '{}': {}", name, reason)]
    InvalidFallback {
        /// Name of the offending `[[fallbacks]]` entry
        name: String,
        /// Why the entry was rejected
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use modelscout_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidFallback {
///     name: "Groq".to_string(),
///     reason: "no provider fragments".to_string(),
/// });
/// assert!(format!("{}", err).contains("Invalid fallback 'Groq'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
