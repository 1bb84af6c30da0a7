//! Linear UTC offset handling.
//!
//! The clock never consults a timezone database. The phone reports one offset
//! for the current location and every UTC result is shifted by it.

use super::ephemeris::RiseSetTime;
use super::math::wrap_once;

/// Convert a phone-style UTC offset to hours east of UTC.
///
/// The phone reports the number of seconds to *add to local time* to obtain
/// UTC (New York in summer reports `+14400`). The clock needs the opposite: the
/// hours to add to UTC to get local time.
pub fn tz_hours_from_utc_offset(utc_offset_secs: i32) -> f64 {
    -(utc_offset_secs as f64 / 3600.0)
}

impl RiseSetTime {
    /// Shift a UTC result into local time.
    ///
    /// Wraps into `[0, 24)` with one conditional add or subtract, so only
    /// results that are slightly out of range get folded back.
    pub fn to_local(self, tz_hours: f64) -> RiseSetTime {
        self.map(|utc| wrap_once(utc + tz_hours, 24.0))
    }
}

/// Free-function spelling of [`RiseSetTime::to_local`].
pub fn adjust_timezone(time: RiseSetTime, tz_hours: f64) -> RiseSetTime {
    time.to_local(tz_hours)
}
