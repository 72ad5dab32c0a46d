//! Tests for service configuration resolution
//!
//! Covers priority order (CLI > env > TOML > default) and graceful handling
//! of missing or broken config files.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions.
//! Tests that manipulate PORT, DATABASE_URL or WILDCAM_CONFIG are marked with
//! #[serial] so they run sequentially.

use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wildcam_common::config::{
    load_toml_config, resolve_service_config, CliOverrides, TomlConfig, DEFAULT_DATABASE_URL,
    DEFAULT_PORT,
};

fn clear_env() {
    env::remove_var("PORT");
    env::remove_var("DATABASE_URL");
    env::remove_var("WILDCAM_CONFIG");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write config");
    file
}

fn missing_config() -> CliOverrides {
    CliOverrides {
        config_file: Some(PathBuf::from("/nonexistent/wildcam/config.toml")),
        ..Default::default()
    }
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let config = resolve_service_config(&missing_config());

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.bind_address, "0.0.0.0");
}

#[test]
#[serial]
fn test_env_overrides_default() {
    clear_env();
    env::set_var("PORT", "9100");
    env::set_var("DATABASE_URL", "sqlite:///var/lib/wildcam/cams.db");

    let config = resolve_service_config(&missing_config());

    assert_eq!(config.port, 9100);
    assert_eq!(config.database_url, "sqlite:///var/lib/wildcam/cams.db");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_ignored() {
    clear_env();
    env::set_var("PORT", "eighty");

    let config = resolve_service_config(&missing_config());
    assert_eq!(config.port, DEFAULT_PORT);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var("PORT", "9100");

    let cli = CliOverrides {
        port: Some(9200),
        database_url: Some("sqlite://cli.db".to_string()),
        ..missing_config()
    };
    let config = resolve_service_config(&cli);

    assert_eq!(config.port, 9200);
    assert_eq!(config.database_url, "sqlite://cli.db");

    clear_env();
}

#[test]
#[serial]
fn test_toml_file_used_below_env() {
    clear_env();
    let file = write_config(
        r#"
        bind_address = "127.0.0.1"
        port = 7000
        database_url = "sqlite://from-file.db"
        "#,
    );
    env::set_var("PORT", "7100");

    let cli = CliOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = resolve_service_config(&cli);

    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.port, 7100);
    assert_eq!(config.database_url, "sqlite://from-file.db");
    assert_eq!(config.listen_addr(), "127.0.0.1:7100");

    clear_env();
}

#[test]
#[serial]
fn test_config_path_from_env() {
    clear_env();
    let file = write_config("port = 7300\n");
    env::set_var("WILDCAM_CONFIG", file.path());

    let config = resolve_service_config(&CliOverrides::default());
    assert_eq!(config.port, 7300);

    clear_env();
}

#[test]
#[serial]
fn test_malformed_toml_falls_back_to_defaults() {
    clear_env();
    let file = write_config("port = \"not a number\"\n[[broken");

    let cli = CliOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = resolve_service_config(&cli);

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
}

#[test]
fn test_load_toml_config_partial() {
    let file = write_config("database_url = \"sqlite://partial.db\"\n");

    let config = load_toml_config(file.path()).expect("Should parse partial config");
    assert_eq!(
        config,
        TomlConfig {
            bind_address: None,
            port: None,
            database_url: Some("sqlite://partial.db".to_string()),
        }
    );
}

#[test]
fn test_load_toml_config_missing_file() {
    let result = load_toml_config(&PathBuf::from("/nonexistent/config.toml"));
    assert!(result.is_err());
}
