//! Sunrise, sunset and twilight times from the almanac method.
//!
//! This is the "Almanac for Computers" (1990) algorithm of the Nautical Almanac
//! Office, United States Naval Observatory. It is a closed-form approximation:
//! no iteration, one pass of trigonometry per event, good to roughly a minute
//! for inhabited latitudes.
//!
//! All inputs and outputs are UTC. A zenith angle selects which event is being
//! located; see [`Zenith`] for the four the clock face uses.

use super::math::{acos_deg, asin_deg, atan_deg, cos_deg, floor, sin_deg, tan_deg, wrap_once};

/// Angle between the sun and the point directly overhead, in degrees.
///
/// "Rise" and "set" for a given zenith mean the moments the sun's centre
/// crosses that angle on the way up and on the way down.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Zenith(pub f64);

impl Zenith {
    /// Official sunrise/sunset, 90°50′ (refraction plus solar radius).
    pub const OFFICIAL: Zenith = Zenith(90.0 + 50.0 / 60.0);
    /// End of civil twilight, sun 6° below the horizon.
    pub const CIVIL: Zenith = Zenith(96.0);
    /// End of nautical twilight, sun 12° below the horizon.
    pub const NAUTICAL: Zenith = Zenith(102.0);
    /// End of astronomical twilight, sun 18° below the horizon.
    pub const ASTRONOMICAL: Zenith = Zenith(108.0);

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Short human-readable name of the canonical zeniths.
    pub fn label(self) -> &'static str {
        if self == Self::OFFICIAL {
            "sunrise/sunset"
        } else if self == Self::CIVIL {
            "civil twilight"
        } else if self == Self::NAUTICAL {
            "nautical twilight"
        } else if self == Self::ASTRONOMICAL {
            "astronomical twilight"
        } else {
            "custom zenith"
        }
    }
}

/// Hour of day (fractional minutes) of a solar event, or the fact that the
/// event does not happen on that date at that place.
///
/// `Never` covers both polar day and polar night: the sun stays on one side
/// of the requested zenith all day. It is an ordinary result, and every
/// transformation below carries it through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetTime {
    Hour(f64),
    Never,
}

impl RiseSetTime {
    pub fn hour(self) -> Option<f64> {
        match self {
            RiseSetTime::Hour(hour) => Some(hour),
            RiseSetTime::Never => None,
        }
    }

    pub fn is_never(self) -> bool {
        matches!(self, RiseSetTime::Never)
    }

    /// Apply `f` to the hour, leaving `Never` as it is.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> RiseSetTime {
        match self {
            RiseSetTime::Hour(hour) => RiseSetTime::Hour(f(hour)),
            RiseSetTime::Never => RiseSetTime::Never,
        }
    }
}

impl From<Option<f64>> for RiseSetTime {
    fn from(hour: Option<f64>) -> Self {
        hour.map_or(RiseSetTime::Never, RiseSetTime::Hour)
    }
}

/// Rise or set of the sun through `zenith` on the given UTC date.
///
/// Latitude is degrees north (negative south), longitude degrees east
/// (negative west). Latitude outside [-90, 90] is a caller error and yields an
/// unspecified value.
pub fn solve(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    want_set: bool,
    zenith: Zenith,
) -> RiseSetTime {
    let n = day_of_year(year, month, day);

    let lng_hour = longitude / 15.0;
    let t = if want_set {
        n as f64 + ((18.0 - lng_hour) / 24.0)
    } else {
        n as f64 + ((6.0 - lng_hour) / 24.0)
    };

    // Mean anomaly and true longitude
    let m = (0.9856 * t) - 3.289;
    let l = wrap_once(
        m + (1.916 * sin_deg(m)) + (0.020 * sin_deg(2.0 * m)) + 282.634,
        360.0,
    );

    // Right ascension, pulled into the same quadrant as L, in hours
    let mut ra = wrap_once(atan_deg(0.91764 * tan_deg(l)), 360.0);
    ra += (floor(l / 90.0) - floor(ra / 90.0)) * 90.0;
    let ra = ra / 15.0;

    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    let cos_h = (cos_deg(zenith.degrees()) - (sin_dec * sin_deg(latitude)))
        / (cos_dec * cos_deg(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        return RiseSetTime::Never;
    }

    let h = if want_set {
        acos_deg(cos_h)
    } else {
        360.0 - acos_deg(cos_h)
    };
    let h = h / 15.0;

    let local_mean = h + ra - (0.06571 * t) - 6.622;

    RiseSetTime::Hour(wrap_once(local_mean - lng_hour, 24.0))
}

/// UTC time the sun rises through `zenith`.
pub fn sunrise(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> RiseSetTime {
    solve(year, month, day, latitude, longitude, false, zenith)
}

/// UTC time the sun sets through `zenith`.
pub fn sunset(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> RiseSetTime {
    solve(year, month, day, latitude, longitude, true, zenith)
}

/// Day of year, 1-based, by the almanac's integer formula.
pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let month = month as i32;
    let day = day as i32;

    let n1 = (275 * month).div_euclid(9);
    let n2 = (month + 9).div_euclid(12);
    let n3 = 1 + (year - 4 * year.div_euclid(4) + 2).div_euclid(3);

    n1 - (n2 * n3) + day - 30
}
