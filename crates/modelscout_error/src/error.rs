//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, StageError};

/// Every error the modelscout crates can surface.
///
/// # Examples
///
/// ```
/// use modelscout_error::{JsonError, JsonErrorKind, ModelScoutError};
///
/// let err: ModelScoutError = JsonError::new(JsonErrorKind::MalformedRows("trailing comma".into())).into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ModelScoutErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Staging file error
    #[from(StageError)]
    Stage(StageError),
}

/// modelscout error with kind discrimination.
///
/// # Examples
///
/// ```
/// use modelscout_error::{ConfigError, ConfigErrorKind, ModelScoutErrorKind, ModelScoutResult};
///
/// fn might_fail() -> ModelScoutResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Read("modelscout.toml: not found".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ModelScoutErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("ModelScout Error: {}", _0)]
pub struct ModelScoutError(Box<ModelScoutErrorKind>);

impl ModelScoutError {
    /// Create a new error from a kind.
    pub fn new(kind: ModelScoutErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ModelScoutErrorKind {
        &self.0
    }
}

impl<T> From<T> for ModelScoutError
where
    T: Into<ModelScoutErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for modelscout operations.
pub type ModelScoutResult<T> = std::result::Result<T, ModelScoutError>;
