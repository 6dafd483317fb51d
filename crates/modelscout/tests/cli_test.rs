//! Tests for the modelscout command-line interface.

use clap::Parser;
use modelscout::cli::{Cli, Commands, OutputFormat, handle_normalize, load_config, render_limit};
use modelscout::{ModelScoutConfig, NormalizedRateLimit, RateLimitParser};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, TempDir};

#[test]
fn test_parse_command_arguments() {
    let cli = Cli::try_parse_from([
        "modelscout",
        "parse",
        "--provider",
        "groq",
        "--text",
        "RPM: 30, TPM: 15K",
        "--format",
        "json",
    ])
    .unwrap();

    assert!(!cli.verbose);
    match cli.command {
        Commands::Parse {
            provider,
            text,
            format,
        } => {
            assert_eq!(provider, "groq");
            assert_eq!(text.as_deref(), Some("RPM: 30, TPM: 15K"));
            assert_eq!(format, OutputFormat::Json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_normalize_command_arguments() {
    let cli = Cli::try_parse_from([
        "modelscout",
        "-v",
        "--config",
        "custom.toml",
        "normalize",
        "--input",
        "in.json",
        "--output",
        "out/models.json",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    match cli.command {
        Commands::Normalize { input, output } => {
            assert_eq!(input, PathBuf::from("in.json"));
            assert_eq!(output, PathBuf::from("out/models.json"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_requires_provider() {
    assert!(Cli::try_parse_from(["modelscout", "parse", "--text", "RPM: 1"]).is_err());
}

#[test]
fn test_render_human() {
    let limit = NormalizedRateLimit::new(Some(20), Some(50), None, None, false);
    let rendered = render_limit(&limit, OutputFormat::Human).unwrap();

    assert!(rendered.starts_with("Rate limits (provider fallback):"));
    assert!(rendered.contains("Requests/min  20"));
    assert!(rendered.contains("Requests/day  50"));
    assert!(rendered.contains("Tokens/min    -"));

    let rendered = render_limit(&NormalizedRateLimit::default(), OutputFormat::Human).unwrap();
    assert!(rendered.starts_with("Rate limits (unknown):"));
}

#[test]
fn test_render_json() {
    let limit = RateLimitParser::default().parse(Some("20 requests/min 50/day"), "openrouter");
    let rendered = render_limit(&limit, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(
        value,
        json!({
            "requests_per_minute": 20,
            "requests_per_day": 50,
            "tokens_per_minute": null,
            "tokens_per_day": null,
            "parseable": true
        })
    );
}

#[test]
fn test_load_config_from_explicit_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[[fallbacks]]
name = "SambaNova"
fragments = ["sambanova"]
rpm = 10
"#
    )
    .unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.fallbacks.entries()[0].name, "SambaNova");
}

#[tokio::test]
async fn test_handle_normalize_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("stage_2.json");
    let output = temp_dir.path().join("stage_3").join("models.json");

    std::fs::write(
        &input,
        serde_json::to_vec(&json!([
            {"id": "a", "provider": "groq", "rate_limits": "RPM: 30, TPM: 15K, RPD: 14.4K, TPD: 500K"},
            {"id": "b", "provider": "gemini", "rate_limits": ""},
        ]))
        .unwrap(),
    )
    .unwrap();

    let summary = handle_normalize(&ModelScoutConfig::default(), &input, &output)
        .await
        .unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.parsed, 1);
    assert_eq!(summary.fallback, 1);

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(written[0]["id"], "a");
    assert_eq!(written[0]["quota"]["tokens_per_day"], 500_000);
    assert_eq!(written[1]["quota"]["requests_per_minute"], 15);
    assert_eq!(written[1]["quota"]["parseable"], false);
}
