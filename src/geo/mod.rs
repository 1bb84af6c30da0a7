//! Solar calculations for the twilight clock.
//!
//! ## Module Structure
//!
//! - [`math`]: degree-based trigonometry wrappers
//! - [`ephemeris`]: almanac sunrise/sunset/twilight solver, UTC in and out
//! - [`timezone`]: linear UTC offset applied to solver results
//! - [`times`]: all four rise/set pairs for one location and date
//! - [`moon`]: lunar phase index and glyph
//! - [`display`]: clock-text formatting and the twilight table
//!
//! Everything here is pure: no I/O, no shared state. The only input that comes
//! from outside is a [`Location`], handed over by a [`LocationProvider`].

pub mod display;
pub mod ephemeris;
pub mod math;
pub mod moon;
pub mod times;
pub mod timezone;

pub use display::{ClockStyle, format_clock_time, log_twilight_table};
pub use ephemeris::{RiseSetTime, Zenith, solve, sunrise, sunset};
pub use moon::MoonPhase;
pub use times::TwilightTimes;
pub use timezone::{adjust_timezone, tz_hours_from_utc_offset};

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Where the clock is, as last reported by the phone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees from the equator, positive north.
    pub latitude: f64,
    /// Degrees from Greenwich, positive east.
    pub longitude: f64,
    /// Seconds to add to local time to obtain UTC.
    pub utc_offset_secs: i32,
}

impl Location {
    /// Build a location, rejecting coordinates the solver is not defined for.
    pub fn new(latitude: f64, longitude: f64, utc_offset_secs: i32) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            anyhow::bail!("latitude must be between -90 and 90 degrees (got {latitude})");
        }
        if !(-180.0..=180.0).contains(&longitude) {
            anyhow::bail!("longitude must be between -180 and 180 degrees (got {longitude})");
        }
        if utc_offset_secs.abs() > MAX_UTC_OFFSET_SECS {
            anyhow::bail!(
                "UTC offset must be within ±{} hours (got {} seconds)",
                MAX_UTC_OFFSET_SECS / 3600,
                utc_offset_secs
            );
        }
        Ok(Self {
            latitude,
            longitude,
            utc_offset_secs,
        })
    }

    /// Hours to add to UTC to get local time.
    pub fn tz_hours(&self) -> f64 {
        tz_hours_from_utc_offset(self.utc_offset_secs)
    }

    /// Wall-clock time at this location for the instant `utc`.
    pub fn local_datetime(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        utc.naive_utc() - Duration::seconds(self.utc_offset_secs as i64)
    }

    /// Same place and offset, compared exactly as stored.
    pub fn same_as(&self, latitude: f64, longitude: f64, utc_offset_secs: i32) -> bool {
        self.latitude == latitude
            && self.longitude == longitude
            && self.utc_offset_secs == utc_offset_secs
    }
}

/// Largest offset any real timezone uses (UTC+14).
pub const MAX_UTC_OFFSET_SECS: i32 = 14 * 3600;

/// Source of the current location.
///
/// `None` means nothing has been received yet; callers must not recompute the
/// face until a location is available.
pub trait LocationProvider {
    fn location(&self) -> Option<Location>;
}

impl LocationProvider for Location {
    fn location(&self) -> Option<Location> {
        Some(*self)
    }
}

impl LocationProvider for Option<Location> {
    fn location(&self) -> Option<Location> {
        *self
    }
}
