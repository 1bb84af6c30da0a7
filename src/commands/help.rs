//! Help command implementation.
//!
//! Dispatches `help <command>` to the matching command's detailed help.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("times") | Some("t") => super::times::display_help(),
        Some("render") | Some("r") => super::render::display_help(),
        Some("watch") | Some("w") => super::watch::display_help(),
        Some("location") | Some("l") => super::location::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_version!();
            log_warning!("Unknown command: {}", unknown);
            log_end!();
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("times, t                Sunrise, sunset and twilight times");
    log_indented!("render, r               Draw the face once");
    log_indented!("watch, w                Redraw the face every minute");
    log_indented!("location, l             Set, show or clear the stored location");
    log_indented!("help, h [COMMAND]       Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'twilight-clock help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'twilight-clock --help' to see all options and general usage.");
    log_end!();
}

fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: twilight-clock help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("twilight-clock help");
    log_indented!("twilight-clock help render");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Log;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_every_command_has_help() {
        Log::set_enabled(false);
        for name in [
            None,
            Some("times"),
            Some("r"),
            Some("watch"),
            Some("location"),
            Some("help"),
            Some("dance"),
        ] {
            assert!(run_help_command(name).is_ok());
        }
        Log::set_enabled(true);
    }
}
