//! JSON error types.

/// Which direction of JSON handling failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum JsonErrorKind {
    /// A staging file is not a JSON array of model rows
    #[display("Malformed model rows: {}", _0)]
    MalformedRows(String),
    /// Records could not be encoded as JSON
    #[display("Failed to encode JSON: {}", _0)]
    Encode(String),
}

/// JSON serialization/deserialization error with source location.
///
/// # Examples
///
/// ```
/// use modelscout_error::{JsonError, JsonErrorKind};
///
/// let err = JsonError::new(JsonErrorKind::MalformedRows(
///     "models.json: invalid type: map, expected a sequence".to_string(),
/// ));
/// assert!(format!("{}", err).contains("Malformed model rows"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", kind, line, file)]
pub struct JsonError {
    /// The kind of error that occurred
    pub kind: JsonErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JSON error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: JsonErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
