//! Main application entry point.
//!
//! Parses the command line, builds the shared [`CommandContext`] and hands
//! control to the selected command. Errors are printed in the logger's box
//! style and turn into a non-zero exit status.

use anyhow::Result;

use twilight_clock::args::{self, CliAction, ParsedArgs, RunOptions};
use twilight_clock::commands::{self, CommandContext};
use twilight_clock::constants::EXIT_FAILURE;
use twilight_clock::log_error_exit;

fn with_context(options: &RunOptions, run: impl FnOnce(CommandContext) -> Result<()>) -> Result<()> {
    run(CommandContext::prepare(options)?)
}

fn dispatch(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Help { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::Times { options, date } => with_context(&options, |ctx| {
            commands::times::handle_times_command(&ctx, date)
        }),
        CliAction::Render {
            options,
            date,
            time,
            output,
        } => with_context(&options, |ctx| {
            commands::render::handle_render_command(&ctx, date, time, output.as_deref())
        }),
        CliAction::Watch { options } => {
            with_context(&options, commands::watch::handle_watch_command)
        }
        CliAction::LocationSet {
            options,
            latitude,
            longitude,
            utc_offset_hours,
        } => with_context(&options, |mut ctx| {
            commands::location::handle_location_set_command(
                &mut ctx,
                latitude,
                longitude,
                utc_offset_hours,
            )
        }),
        CliAction::LocationShow { options } => with_context(&options, |ctx| {
            commands::location::handle_location_show_command(&ctx)
        }),
        CliAction::LocationClear { options } => with_context(&options, |mut ctx| {
            commands::location::handle_location_clear_command(&mut ctx.store)
        }),
    }
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    if let Err(e) = dispatch(parsed_args.action) {
        log_error_exit!("{e:#}");
        std::process::exit(EXIT_FAILURE);
    }
}
