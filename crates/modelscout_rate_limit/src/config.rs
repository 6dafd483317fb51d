//! Configuration for the rate-limit parser.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from modelscout.toml)
//! - User overrides (./modelscout.toml or ~/.config/modelscout/modelscout.toml)
//! - Later sources replacing earlier ones key by key

use crate::FallbackTable;
use config::{Config, File, FileFormat};
use modelscout_error::{ConfigError, ConfigErrorKind, ModelScoutError, ModelScoutResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../modelscout.toml");

/// Top-level modelscout configuration.
///
/// # Example
///
/// ```no_run
/// use modelscout_rate_limit::{ModelScoutConfig, RateLimitParser};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ModelScoutConfig::load()?;
/// let parser = RateLimitParser::from_config(&config);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ModelScoutConfig {
    /// Provider fallback quotas in match order
    #[serde(default)]
    pub fallbacks: FallbackTable,
}

impl ModelScoutConfig {
    /// Load configuration from a specific file path.
    ///
    /// Only the given file is read; bundled defaults are not layered
    /// underneath, except that a file without a `fallbacks` list gets the
    /// built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ModelScoutResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ModelScoutError::from(ConfigError::new(ConfigErrorKind::Read(format!(
                    "{}: {}",
                    path.as_ref().display(),
                    e
                ))))
            })?
            .try_deserialize()
            .map_err(|e| {
                ModelScoutError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })?;

        config.fallbacks.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (modelscout.toml shipped with the library)
    /// 2. User config in home directory (~/.config/modelscout/modelscout.toml)
    /// 3. User config in current directory (./modelscout.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ModelScoutResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/modelscout/modelscout.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("modelscout").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                ModelScoutError::from(ConfigError::new(ConfigErrorKind::Read(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                ModelScoutError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })?;

        config.fallbacks.validate()?;
        debug!(fallbacks = config.fallbacks.entries().len(), "Configuration loaded");
        Ok(config)
    }

    /// Load the bundled defaults only, ignoring user files.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled file itself is malformed.
    pub fn bundled() -> ModelScoutResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                ModelScoutError::from(ConfigError::new(ConfigErrorKind::Parse(format!(
                    "bundled modelscout.toml: {}",
                    e
                ))))
            })?;

        config.fallbacks.validate()?;
        Ok(config)
    }
}
