use super::builder::default_config_content;
use super::validation::validate_config;
use super::*;
use crate::constants::test_constants::*;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_config_load_default_creation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(APP_NAME).join(CONFIG_FILE_NAME);

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    // First load should create default config
    let result = Config::load();

    // Restore original
    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    if let Err(e) = &result {
        eprintln!("Config::load() failed: {:?}", e);
    }
    assert_eq!(result.unwrap(), Config {
        time_format: Some(ClockStyle::TwentyFourHour),
        show_moon_phase: Some(DEFAULT_SHOW_MOON_PHASE),
        hour_hand: Some(DEFAULT_HOUR_HAND),
        ascii_columns: Some(DEFAULT_ASCII_COLUMNS),
    });
    assert!(config_path.exists());
}

#[test]
fn test_default_content_round_trips_through_the_parser() {
    let config: Config = toml::from_str(&default_config_content()).unwrap();
    assert!(validate_config(&config).is_ok());
    assert_eq!(config.face_options(), FaceOptions::default());
    assert_eq!(config.ascii_columns(), DEFAULT_ASCII_COLUMNS);
}

#[test]
fn test_default_content_aligns_comments() {
    let content = default_config_content();
    let comment_columns: Vec<usize> = content
        .lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .filter_map(|line| line.find('#'))
        .collect();

    assert_eq!(comment_columns.len(), 4);
    assert!(comment_columns.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.clock_style(), ClockStyle::TwentyFourHour);
    assert!(config.show_moon_phase());
    assert!(config.hour_hand());
    assert_eq!(config.ascii_columns(), DEFAULT_ASCII_COLUMNS);
}

#[test]
fn test_load_from_path_reads_every_field() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        temp_dir.path(),
        &format!(
            "time_format = \"12h\"\nshow_moon_phase = false\nhour_hand = false\nascii_columns = {TEST_ASCII_COLUMNS}\n"
        ),
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.clock_style(), ClockStyle::TwelveHour);
    assert!(!config.show_moon_phase());
    assert_eq!(
        config.face_options(),
        FaceOptions {
            clock_style: ClockStyle::TwelveHour,
            hour_hand: false,
        }
    );
    assert_eq!(config.ascii_columns(), TEST_ASCII_COLUMNS);
}

#[test]
fn test_load_from_missing_path_fails() {
    let temp_dir = tempdir().unwrap();
    let result = load_from_path(&temp_dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_unknown_time_format_is_a_parse_error() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "time_format = \"36h\"\n");

    let error = load_from_path(&path).unwrap_err();
    assert!(format!("{error:#}").contains("Failed to parse config"));
}

#[test]
fn test_ascii_columns_limits() {
    for (columns, ok) in [
        (MINIMUM_ASCII_COLUMNS - 1, false),
        (MINIMUM_ASCII_COLUMNS, true),
        (MAXIMUM_ASCII_COLUMNS, true),
        (MAXIMUM_ASCII_COLUMNS + 1, false),
    ] {
        let config = Config {
            ascii_columns: Some(columns),
            ..Config::default()
        };
        assert_eq!(validate_config(&config).is_ok(), ok, "columns {columns}");
    }
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "ascii_columns = 500\n");

    let error = load_from_path(&path).unwrap_err();
    assert!(format!("{error:#}").contains("ascii_columns"));
}
