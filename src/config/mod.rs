//! Configuration system for the twilight clock.
//!
//! Display preferences live in a small TOML file,
//! `XDG_CONFIG_HOME/twilight-clock/twilight-clock.toml`, or in the directory
//! passed with `--config`. Location is not configured here: it arrives from
//! the phone and is kept in the state directory (see [`crate::state`]).
//!
//! ```toml
//! time_format = "24h"      # Clock text style: "24h" or "12h"
//! show_moon_phase = true   # Add the moon phase to the twilight table
//! hour_hand = true         # Draw the 24-hour hand on rendered faces
//! ascii_columns = 72       # Width of terminal previews (24-144)
//! ```
//!
//! When the file does not exist a commented default is written and the
//! defaults are used. Every loaded file is validated before use.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use serde::Deserialize;

use crate::constants::*;
use crate::face::FaceOptions;
use crate::geo::ClockStyle;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

#[cfg(test)]
mod tests;

/// Display preferences. Every field is optional; unset fields use defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Style of sunrise/sunset text, `"24h"` or `"12h"`.
    pub time_format: Option<ClockStyle>,
    pub show_moon_phase: Option<bool>,
    pub hour_hand: Option<bool>,
    /// Character width of terminal previews.
    pub ascii_columns: Option<u16>,
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> Result<Self> {
        load()
    }

    pub fn clock_style(&self) -> ClockStyle {
        self.time_format.unwrap_or_default()
    }

    pub fn show_moon_phase(&self) -> bool {
        self.show_moon_phase.unwrap_or(DEFAULT_SHOW_MOON_PHASE)
    }

    pub fn hour_hand(&self) -> bool {
        self.hour_hand.unwrap_or(DEFAULT_HOUR_HAND)
    }

    pub fn ascii_columns(&self) -> u16 {
        self.ascii_columns.unwrap_or(DEFAULT_ASCII_COLUMNS)
    }

    /// Options for the watchface built from this configuration.
    pub fn face_options(&self) -> FaceOptions {
        FaceOptions {
            clock_style: self.clock_style(),
            hour_hand: self.hour_hand(),
        }
    }

    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Time format: {}", self.clock_style().as_str());
        log_indented!(
            "Moon phase: {}",
            if self.show_moon_phase() { "shown" } else { "hidden" }
        );
        log_indented!(
            "Hour hand: {}",
            if self.hour_hand() { "shown" } else { "hidden" }
        );
        log_indented!("Preview width: {} columns", self.ascii_columns());
    }
}
