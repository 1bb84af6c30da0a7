//! Structured logging with box-drawing output.
//!
//! Every line the CLI prints goes through [`write_output`], either through one of
//! the structured macros (`log_block_start!`, `log_decorated!`, `log_indented!`,
//! `log_pipe!`, `log_version!`, `log_end!`) or through one of the semantic ones
//! (`log_info!`, `log_warning!`, `log_error!`, `log_debug!`, `log_critical!`).
//!
//! ## Conventions
//!
//! - `log_block_start!` opens a new conceptual block (`┃` then `┣ message`).
//! - `log_decorated!` continues a block (`┣ message`).
//! - `log_indented!` lists details belonging to the previous line (`┃   message`).
//! - `log_pipe!` inserts vertical spacing before a semantic message that starts
//!   its own block.
//! - `log_debug!` is silent unless debug output was switched on with
//!   [`Log::set_debug`].
//!
//! Logging can be switched off entirely, which the test suite does to keep the
//! output of rendering tests readable.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Process-wide switches for the logging macros.
pub struct Log;

impl Log {
    /// Enable or disable all log output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable or disable `log_debug!` output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        Self::is_enabled() && DEBUG_ENABLED.load(Ordering::SeqCst)
    }
}

/// Write already formatted text to stdout.
///
/// Public because the exported macros expand to calls of it.
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Format one log line from a literal format string or a displayable expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($template:literal, $fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!($template, message));
        }
    }};
    ($template:literal, $expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let message = $expr;
            $crate::logger::write_output(&format!($template, message));
        }
    }};
}

/// Log a decorated message, typically as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)+) => { $crate::__log_line!("┣ {}\n", $($arg)+) };
}

/// Log an indented detail line within a block.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)+) => { $crate::__log_line!("┃   {}\n", $($arg)+) };
}

/// Log a block start message, opening a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)+) => { $crate::__log_line!("┃\n┣ {}\n", $($arg)+) };
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ twilight-clock v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log an informational message with a green `INFO` tag.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[32mINFO\x1b[0m] {}\n", $($arg)+) };
}

/// Log a warning with a yellow `WARNING` tag.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[33mWARNING\x1b[0m] {}\n", $($arg)+) };
}

/// Log an error with a red `ERROR` tag.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[31mERROR\x1b[0m] {}\n", $($arg)+) };
}

/// Log an error that terminates the current flow, closing the box.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)+) => { $crate::__log_line!("┃\n┗[\x1b[31mERROR\x1b[0m] {}\n", $($arg)+) };
}

/// Log a critical message with a red `CRITICAL` tag.
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[31mCRITICAL\x1b[0m] {}\n", $($arg)+) };
}

/// Log a debug message; only shown when debug output is on.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_debug() {
            $crate::__log_line!("┣[\x1b[32mDEBUG\x1b[0m] {}\n", $($arg)+);
        }
    }};
}
