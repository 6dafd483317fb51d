//! Staging file error types.

/// Kinds of staging file errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StageErrorKind {
    /// Failed to create the output directory
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read a staging file
    #[display("Failed to read staging file: {}", _0)]
    FileRead(String),
    /// Failed to write a staging file
    #[display("Failed to write staging file: {}", _0)]
    FileWrite(String),
}

/// Staging file error with location tracking.
///
/// # Examples
///
/// ```
/// use modelscout_error::{StageError, StageErrorKind};
///
/// let err = StageError::new(StageErrorKind::FileRead("models.json".to_string()));
/// assert!(format!("{}", err).contains("models.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stage Error: {} at line {} in {}", kind, line, file)]
pub struct StageError {
    /// The kind of error that occurred
    pub kind: StageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StageError {
    /// Create a new staging error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
