//! Logging configured from launchmap config files.

use launchmap_config::Config;
use launchmap_telemetry::{LogConfig, LogFormat, LogTarget, TelemetryError};

fn load(toml: &str) -> Config {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, toml).unwrap();
    Config::load_file(&path).unwrap()
}

#[test]
fn test_log_config_from_logging_section() {
    let config = load(
        r#"
        [logging]
        level = "debug"
        format = "json"
        directives = ["launchmap_resolve=trace"]
        "#,
    );

    let log = LogConfig::try_from(&config.logging).unwrap();

    assert_eq!(log.level, "debug");
    assert_eq!(log.format, LogFormat::Json);
    assert_eq!(log.directives, ["launchmap_resolve=trace"]);
    assert_eq!(log.target, LogTarget::Stderr);
}

#[test]
fn test_defaults_produce_pretty_info_logging() {
    let config = load("");

    let log = LogConfig::try_from(&config.logging).unwrap();

    assert_eq!(log, LogConfig::new("info").with_format(LogFormat::Pretty));
}

#[test]
fn test_unknown_format_rejected_by_bridge() {
    // Bypasses file validation to reach the bridge directly.
    let mut section = load("").logging;
    section.format = "xml".to_owned();

    let err = LogConfig::try_from(&section).unwrap_err();
    assert!(matches!(err, TelemetryError::ConfigError(_)));
    assert!(launchmap_telemetry::setup_logging_from_config(&section).is_err());
}
