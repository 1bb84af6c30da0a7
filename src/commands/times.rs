//! `times` command: the day's rise/set table.

use anyhow::Result;
use chrono::NaiveDate;

use super::CommandContext;
use crate::geo::{MoonPhase, TwilightTimes, log_twilight_table};
use crate::time_source;

/// Print the twilight table for `date`, or for today at the stored location.
pub fn handle_times_command(ctx: &CommandContext, date: Option<NaiveDate>) -> Result<()> {
    let location = ctx.require_location()?;
    let now_utc = time_source::now_utc();

    let date = date.unwrap_or_else(|| location.local_datetime(now_utc).date());
    let times = TwilightTimes::compute(&location, date);

    // The moon is looked up by UTC date unless a date was asked for
    let moon = ctx.config.show_moon_phase().then(|| {
        let moon_date = if date == location.local_datetime(now_utc).date() {
            now_utc.date_naive()
        } else {
            date
        };
        MoonPhase::on(moon_date, location.latitude)
    });

    log_version!();
    log_twilight_table(&times, ctx.config.clock_style(), moon);
    log_end!();
    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("times - Show sunrise, sunset and twilight times");
    log_block_start!("Usage: twilight-clock times [--date YYYY-MM-DD]");
    log_block_start!("Description:");
    log_indented!("Lists when the sun crosses the official, civil, nautical and");
    log_indented!("astronomical zeniths at the stored location, in local time.");
    log_indented!("Events that do not happen that day show as --:--.");
    log_block_start!("Examples:");
    log_indented!("# Today");
    log_indented!("twilight-clock times");
    log_pipe!();
    log_indented!("# The June solstice");
    log_indented!("twilight-clock times --date 2024-06-21");
    log_end!();
}
