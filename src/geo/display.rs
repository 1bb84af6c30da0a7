//! Clock-text formatting and the twilight table.

use chrono::NaiveTime;
use serde::Deserialize;

use super::ephemeris::RiseSetTime;
use super::moon::MoonPhase;
use super::times::{RiseSet, TwilightTimes};

/// Placeholder shown for an event that does not occur.
pub const NO_TIME_TEXT: &str = "--:--";

/// How clock times are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ClockStyle {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockStyle {
    fn pattern(self) -> &'static str {
        match self {
            ClockStyle::TwentyFourHour => "%H:%M",
            ClockStyle::TwelveHour => "%l:%M",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClockStyle::TwentyFourHour => "24h",
            ClockStyle::TwelveHour => "12h",
        }
    }
}

/// Write an hour-of-day as clock text.
///
/// Minutes are truncated, not rounded, so 5.999h shows as `05:59`.
pub fn format_clock_time(time: RiseSetTime, style: ClockStyle) -> String {
    let Some(hours) = time.hour() else {
        return NO_TIME_TEXT.to_string();
    };

    let whole = hours.trunc();
    let minutes = (60.0 * (hours - whole)) as u32;

    match NaiveTime::from_hms_opt(whole as u32, minutes, 0) {
        Some(clock) => clock.format(style.pattern()).to_string().trim_start().to_string(),
        None => NO_TIME_TEXT.to_string(),
    }
}

fn format_span(pair: &RiseSet) -> String {
    match pair.span_hours() {
        Some(span) => {
            let whole = span.trunc();
            format!("{}h{:02}m", whole as u32, (60.0 * (span - whole)) as u32)
        }
        None => "polar".to_string(),
    }
}

/// Log the day's rise/set table in the box-drawing style.
pub fn log_twilight_table(times: &TwilightTimes, style: ClockStyle, moon: Option<MoonPhase>) {
    let location = &times.location;

    log_block_start!("Twilight for {}", times.date.format("%a %b %e, %Y"));
    log_indented!(
        "Location: {:.4}°, {:.4}° (UTC{:+.1}h)",
        location.latitude,
        location.longitude,
        location.tz_hours()
    );

    for pair in times.pairs() {
        log_indented!(
            "{:<22} {:>5}  {:>5}  {}",
            pair.zenith.label(),
            format_clock_time(pair.rise, style),
            format_clock_time(pair.set, style),
            format_span(pair)
        );
    }

    if let Some(phase) = moon {
        log_indented!("Moon: {} ({}/27)", phase.name(), phase.index());
    }
}
