// Unit tests for loading, saving and validating the backend configuration

use crate::DEFAULT_BACKEND_BASE_URL;
use crate::config::BotConfig;
use crate::error::ConfigError;

use std::time::Duration;

use tempfile::TempDir;

#[test]
fn given_default_config_then_targets_local_backend_without_timeout() {
    let config = BotConfig::default();

    assert_eq!(config.backend.base_url, "http://localhost:5001");
    assert_eq!(config.backend.base_url, DEFAULT_BACKEND_BASE_URL);
    assert_eq!(config.request_timeout(), None);
    assert!(config.validate().is_ok());
}

/// **VALUE**: Verifies a first run without a config file works with defaults.
///
/// **BUG THIS CATCHES**: Would catch if a missing file were reported as a read error,
/// making the CLI unusable until someone hand-writes a config.
#[test]
fn given_missing_config_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = BotConfig::load(dir.path()).unwrap();

    assert_eq!(config, BotConfig::default());
}

#[test]
fn given_saved_config_when_loading_then_returns_same_values() {
    let dir = TempDir::new().unwrap();
    let mut config = BotConfig::default().with_base_url("https://bot.example.org:8443");
    config.backend.request_timeout_secs = Some(45);

    config.save(dir.path()).unwrap();
    let loaded = BotConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(45)));
    assert!(!dir.path().join("config.json.tmp").exists(), "temp file should be renamed away");
}

/// **VALUE**: Verifies partially written configs fill missing sections with defaults.
///
/// **WHY THIS MATTERS**: Users typically write only the field they care about.
#[test]
fn given_partial_config_when_loading_then_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"backend":{"request_timeout_secs":5}}"#).unwrap();

    let config = BotConfig::load(dir.path()).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.backend.base_url, DEFAULT_BACKEND_BASE_URL);
    assert_eq!(config.backend.request_timeout_secs, Some(5));
}

#[test]
fn given_corrupted_config_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = BotConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies that addresses without an http(s) scheme are rejected up front.
///
/// **BUG THIS CATCHES**: `localhost:5001` parses as a URL with scheme `localhost`; without
/// this check it would only fail later with a confusing transport error.
#[test]
fn given_invalid_base_urls_when_validating_then_returns_validation_error() {
    for base_url in ["", "localhost:5001", "ftp://localhost:5001"] {
        let config = BotConfig::default().with_base_url(base_url);

        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "{base_url:?} should be rejected"
        );
    }
}

#[test]
fn given_zero_timeout_or_bad_version_when_validating_then_returns_validation_error() {
    let mut zero_timeout = BotConfig::default();
    zero_timeout.backend.request_timeout_secs = Some(0);

    let mut future_version = BotConfig::default();
    future_version.version = 2;

    assert!(matches!(zero_timeout.validate(), Err(ConfigError::ValidationError { .. })));
    assert!(matches!(future_version.validate(), Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_invalid_config_when_saving_then_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let config = BotConfig::default().with_base_url("localhost");

    let result = config.save(dir.path());

    assert!(result.is_err());
    assert!(!dir.path().join("config.json").exists());
}
