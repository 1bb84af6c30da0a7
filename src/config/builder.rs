//! Default configuration file creation.
//!
//! The default file lists every setting with its default value and an aligned
//! comment describing the accepted range.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::geo::ClockStyle;

/// Write a commented default configuration to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}

/// Text of the default configuration file.
pub fn default_config_content() -> String {
    ConfigBuilder::new()
        .add_section("Display")
        .add_setting(
            "time_format",
            &format!("\"{}\"", ClockStyle::default().as_str()),
            "Sunrise/sunset text: \"24h\" or \"12h\"",
        )
        .add_setting(
            "show_moon_phase",
            &DEFAULT_SHOW_MOON_PHASE.to_string(),
            "Show the moon phase with the twilight table",
        )
        .add_setting(
            "hour_hand",
            &DEFAULT_HOUR_HAND.to_string(),
            "Draw the 24-hour hand on the face",
        )
        .add_section("Terminal preview")
        .add_setting(
            "ascii_columns",
            &DEFAULT_ASCII_COLUMNS.to_string(),
            &format!(
                "Preview width in characters ({MINIMUM_ASCII_COLUMNS}-{MAXIMUM_ASCII_COLUMNS})"
            ),
        )
        .build()
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // Align every comment one space past the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.push(String::new());
        result.join("\n")
    }
}
