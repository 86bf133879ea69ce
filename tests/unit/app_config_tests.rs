/*!
 * Tests for application configuration
 */

use anyhow::Result;
use fixsrt::app_config::{Config, LogLevel};
use fixsrt::errors::AppError;
use crate::common;

#[test]
fn test_default_config_shouldMatchOriginalToolBehaviour() {
    let config = Config::default();

    assert_eq!(config.file_suffix, "srt");
    assert_eq!(config.backup_suffix, ".bak");
    assert_eq!(config.first_index, 0);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "fixsrt.json",
        r#"{ "first_index": 1, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.first_index, 1);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.file_suffix, "srt");
    assert_eq!(config.backup_suffix, ".bak");
    Ok(())
}

#[test]
fn test_from_file_withInvalidJson_shouldReturnConfigError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let err = Config::from_file(&path).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    Ok(())
}

#[test]
fn test_from_file_withMissingFile_shouldReturnConfigError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let err = Config::from_file(temp_dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    Ok(())
}

#[test]
fn test_validate_withEmptySuffixes_shouldFail() {
    let no_suffix = Config { file_suffix: String::new(), ..Config::default() };
    let no_backup = Config { backup_suffix: String::new(), ..Config::default() };

    assert!(no_suffix.validate().is_err());
    assert!(no_backup.validate().is_err());
}

#[test]
fn test_config_serde_shouldUseLowercaseLogLevel() -> Result<()> {
    let json = serde_json::to_string(&Config::default())?;
    assert!(json.contains(r#""log_level":"info""#));

    let parsed: Config = serde_json::from_str(&json)?;
    assert_eq!(parsed, Config::default());
    Ok(())
}

#[test]
fn test_log_level_shouldConvertToLevelFilter() {
    assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}
