//! Application-wide constants: defaults, validation limits and exit codes.

// Application identity
pub const APP_NAME: &str = "twilight-clock";
pub const CONFIG_FILE_NAME: &str = "twilight-clock.toml";
pub const LOCATION_FILE_NAME: &str = "location.json";

// Display defaults
pub const DEFAULT_SHOW_MOON_PHASE: bool = true;
pub const DEFAULT_HOUR_HAND: bool = true;
pub const DEFAULT_ASCII_COLUMNS: u16 = 72;

// Validation limits
pub const MINIMUM_ASCII_COLUMNS: u16 = 24;
pub const MAXIMUM_ASCII_COLUMNS: u16 = 144;

// Watch loop
pub const WATCH_TICK_SECS: u64 = 60;

// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
