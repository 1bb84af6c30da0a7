//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. Global flags (`--debug`,
//! `--config`, `--at`, `--help`, `--version`) are accepted anywhere; the first
//! positional argument picks the command.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Pin "now" to this UTC instant instead of the system clock.
    pub at: Option<NaiveDateTime>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the day's twilight table (the default command)
    Times {
        options: RunOptions,
        date: Option<NaiveDate>,
    },
    /// Render the face to a PGM file or the terminal
    Render {
        options: RunOptions,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        output: Option<PathBuf>,
    },
    /// Redraw the face in the terminal every minute
    Watch { options: RunOptions },
    /// Store a location as if the phone had reported it
    LocationSet {
        options: RunOptions,
        latitude: f64,
        longitude: f64,
        /// Conventional offset, e.g. `-4` for UTC-4
        utc_offset_hours: f64,
    },
    /// Show the stored location
    LocationShow { options: RunOptions },
    /// Forget the stored location
    LocationClear { options: RunOptions },
    /// Show detailed help for one command, or the command list
    Help { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

/// Negative numbers are values, not flags.
fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && arg.parse::<f64>().is_err()
}

fn parse_value<T>(value: &str, name: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() {
        log_warning!("Invalid value for {}: {}", name, value);
    }
    parsed
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ParsedArgs {
            action: Self::parse_action(args),
        }
    }

    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }

    fn parse_action<I, S>(args: I) -> CliAction
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = RunOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut date: Option<NaiveDate> = None;
        let mut time: Option<NaiveTime> = None;
        let mut output: Option<PathBuf> = None;
        let mut positional: Vec<&str> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = args_vec[i].as_str();

            // Flags that consume the next argument
            let takes_value = matches!(
                arg,
                "--config" | "-c" | "--at" | "--date" | "--time" | "--output" | "-o"
            );
            let value = if takes_value {
                match args_vec.get(i + 1).filter(|next| !is_flag(next)) {
                    Some(next) => {
                        i += 1;
                        Some(next.as_str())
                    }
                    None => {
                        log_warning!("Missing value for {}", arg);
                        unknown_arg_found = true;
                        i += 1;
                        continue;
                    }
                }
            } else {
                None
            };

            match (arg, value) {
                ("--help" | "-h", _) => display_help = true,
                ("--version" | "-V" | "-v", _) => display_version = true,
                ("--debug" | "-d", _) => options.debug_enabled = true,
                ("--config" | "-c", Some(dir)) => options.config_dir = Some(dir.to_string()),
                ("--at", Some(at)) => {
                    options.at = parse_value(at, "--at", |s| {
                        NaiveDateTime::parse_from_str(s, AT_FORMAT).ok()
                    });
                    unknown_arg_found |= options.at.is_none();
                }
                ("--date", Some(d)) => {
                    date = parse_value(d, "--date", |s| {
                        NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
                    });
                    unknown_arg_found |= date.is_none();
                }
                ("--time", Some(t)) => {
                    time = parse_value(t, "--time", |s| {
                        NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
                    });
                    unknown_arg_found |= time.is_none();
                }
                ("--output" | "-o", Some(path)) => output = Some(PathBuf::from(path)),
                (other, _) if is_flag(other) => {
                    log_warning!("Unknown option: {}", other);
                    unknown_arg_found = true;
                }
                (other, _) => positional.push(other),
            }
            i += 1;
        }

        if display_version {
            return CliAction::ShowVersion;
        }
        if display_help {
            return CliAction::ShowHelp;
        }
        if unknown_arg_found {
            return CliAction::ShowHelpDueToError;
        }

        let command = match positional.first().copied().unwrap_or("times") {
            "t" => "times",
            "r" => "render",
            "w" => "watch",
            "l" => "location",
            "h" => "help",
            other => other,
        };

        // Per-command flags are rejected elsewhere
        let render_only = time.is_some() || output.is_some();
        if (render_only && command != "render")
            || (date.is_some() && !matches!(command, "times" | "render"))
        {
            log_warning!("Option not supported by '{}'", command);
            return CliAction::ShowHelpDueToError;
        }

        match (command, &positional.get(1..).unwrap_or_default()[..]) {
            ("times", []) => CliAction::Times { options, date },
            ("render", []) => CliAction::Render {
                options,
                date,
                time,
                output,
            },
            ("watch", []) => CliAction::Watch { options },
            ("location", [] | ["show"]) => CliAction::LocationShow { options },
            ("location", ["clear"]) => CliAction::LocationClear { options },
            ("help", []) => CliAction::Help { command: None },
            ("help", [name]) => CliAction::Help {
                command: Some(name.to_string()),
            },
            ("location", ["set", lat, lon, offset]) => {
                let number = |value: &str, name: &str| {
                    parse_value(value, name, |s| s.parse::<f64>().ok().filter(|n| n.is_finite()))
                };
                match (
                    number(*lat, "latitude"),
                    number(*lon, "longitude"),
                    number(*offset, "UTC offset"),
                ) {
                    (Some(latitude), Some(longitude), Some(utc_offset_hours)) => {
                        CliAction::LocationSet {
                            options,
                            latitude,
                            longitude,
                            utc_offset_hours,
                        }
                    }
                    _ => CliAction::ShowHelpDueToError,
                }
            }
            ("location", ["set", ..]) => {
                log_warning!(
                    "Usage: twilight-clock location set <latitude> <longitude> <utc_offset_hours>"
                );
                CliAction::ShowHelpDueToError
            }
            ("times" | "render" | "watch" | "location" | "help", extra) => {
                log_warning!("Unexpected arguments for '{}': {}", command, extra.join(" "));
                CliAction::ShowHelpDueToError
            }
            (unknown, _) => {
                log_warning!("Unknown command: {}", unknown);
                CliAction::ShowHelpDueToError
            }
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("twilight-clock [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>      Use custom configuration directory");
    log_indented!("-d, --debug             Enable detailed debug output");
    log_indented!("    --at <YYYY-MM-DD HH:MM>  Pretend it is this UTC instant");
    log_indented!("-h, --help              Print help information");
    log_indented!("-V, --version           Print version information");
    log_block_start!("Commands:");
    log_indented!("times, t [--date D]     Twilight table for today or date D (default)");
    log_indented!("render, r [--date D] [--time HH:MM] [-o FILE.pgm]");
    log_indented!("                        Draw the face to a PGM file or the terminal");
    log_indented!("watch, w                Redraw the face in the terminal every minute");
    log_indented!("location, l set <lat> <lon> <utc_offset_hours>");
    log_indented!("                        Store a location (offset as in UTC-4 => -4)");
    log_indented!("location, l show|clear  Show or forget the stored location");
    log_indented!("help, h [COMMAND]       Show detailed help for a command");
    log_end!();
}
