//! Tests for the fallback configuration system.

use modelscout_error::{ConfigError, ConfigErrorKind, ModelScoutErrorKind};
use modelscout_rate_limit::{FallbackTable, ModelScoutConfig, Quota, RateLimitParser};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::{Builder, TempDir};

/// Serializes tests that depend on the process working directory.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Switches the working directory and restores it on drop.
struct CurrentDir {
    previous: PathBuf,
}

impl CurrentDir {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CurrentDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

#[test]
fn test_bundled_defaults_match_builtin_table() {
    let config = ModelScoutConfig::bundled().unwrap();
    assert_eq!(config.fallbacks, FallbackTable::default());

    let names: Vec<&str> = config
        .fallbacks
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Groq", "Google", "OpenRouter"]);
}

#[test]
fn test_load_without_user_file_uses_bundled_defaults() {
    let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let empty = TempDir::new().unwrap();
    let _cwd = CurrentDir::enter(empty.path());

    let config = ModelScoutConfig::load().unwrap();
    let home_override = dirs::home_dir()
        .is_some_and(|home| home.join(".config/modelscout/modelscout.toml").exists());
    if !home_override {
        assert_eq!(config.fallbacks, FallbackTable::default());
    }
}

#[test]
fn test_load_working_directory_file_replaces_bundled_list() {
    let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("modelscout.toml"),
        r#"
[[fallbacks]]
name = "Cerebras"
fragments = ["cerebras"]
rpm = 7
"#,
    )
    .unwrap();
    let _cwd = CurrentDir::enter(dir.path());

    let config = ModelScoutConfig::load().unwrap();
    let entries = config.fallbacks.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Cerebras");
    assert_eq!(entries[0].fragments, vec!["cerebras".to_string()]);
    assert_eq!(entries[0].rpm, Some(7));
    assert_eq!(entries[0].tpm, None);

    let parser = RateLimitParser::from_config(&config);
    assert_eq!(parser.resolve_fallback("google").rpm(), None);
    assert_eq!(parser.resolve_fallback("Cerebras Inference").rpm(), Some(7));
}

#[test]
fn test_config_from_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[[fallbacks]]
name = "Cerebras"
fragments = ["cerebras"]
rpm = 30
tpd = 1_000_000

[[fallbacks]]
name = "Groq"
fragments = ["groq"]
rpm = 60
"#
    )
    .unwrap();

    let config = ModelScoutConfig::from_file(temp_file.path()).unwrap();
    let entries = config.fallbacks.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Cerebras");
    assert_eq!(entries[0].rpm, Some(30));
    assert_eq!(entries[0].tpd, Some(1_000_000));
    assert_eq!(entries[0].tpm, None);

    let parser = RateLimitParser::from_config(&config);
    assert_eq!(parser.resolve_fallback("groq").rpm(), Some(60));
    assert_eq!(*parser.resolve_fallback("groq").tokens_per_minute(), None);
}

#[test]
fn test_config_without_fallbacks_uses_builtin_table() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "# nothing configured").unwrap();

    let config = ModelScoutConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.fallbacks, FallbackTable::default());
}

#[test]
fn test_config_rejects_blank_fragment() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[[fallbacks]]
name = "Everyone"
fragments = [""]
rpm = 1
"#
    )
    .unwrap();

    let err = ModelScoutConfig::from_file(temp_file.path()).unwrap_err();
    assert!(format!("{}", err).contains("Everyone"));
    assert!(matches!(
        err.kind(),
        ModelScoutErrorKind::Config(ConfigError {
            kind: ConfigErrorKind::InvalidFallback { .. },
            ..
        })
    ));
}

#[test]
fn test_config_missing_file() {
    let err = ModelScoutConfig::from_file("/nonexistent/modelscout.toml").unwrap_err();
    assert!(matches!(
        err.kind(),
        ModelScoutErrorKind::Config(ConfigError {
            kind: ConfigErrorKind::Read(_),
            ..
        })
    ));
}
