//! Error types for the modelscout workspace.
//!
//! Rate-limit parsing itself never fails; these errors cover the ambient
//! surfaces around it (configuration loading, JSON staging files).
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use modelscout_error::{ConfigError, ConfigErrorKind, ModelScoutResult};
//!
//! fn load() -> ModelScoutResult<()> {
//!     Err(ConfigError::new(ConfigErrorKind::Parse("fallbacks: expected an array".into())))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod stage;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{ModelScoutError, ModelScoutErrorKind, ModelScoutResult};
pub use json::{JsonError, JsonErrorKind};
pub use stage::{StageError, StageErrorKind};
