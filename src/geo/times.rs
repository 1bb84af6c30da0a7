//! Rise/set pairs for every zenith the face draws.

use chrono::{Datelike, NaiveDate};

use super::Location;
use super::ephemeris::{RiseSetTime, Zenith, sunrise, sunset};

/// Local rise and set through one zenith.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSet {
    pub zenith: Zenith,
    pub rise: RiseSetTime,
    pub set: RiseSetTime,
}

impl RiseSet {
    /// Rise and set through `zenith` for the calendar fields of `date`,
    /// shifted into the location's local time.
    ///
    /// `date` is a *local* date passed to a solver that expects a UTC date.
    /// Within a few hours of midnight this can pick the neighbouring day's
    /// events; the error is at most the size of the UTC offset.
    pub fn compute(location: &Location, date: NaiveDate, zenith: Zenith) -> Self {
        let (year, month, day) = (date.year(), date.month(), date.day());
        let tz_hours = location.tz_hours();

        let rise = sunrise(year, month, day, location.latitude, location.longitude, zenith);
        let set = sunset(year, month, day, location.latitude, location.longitude, zenith);

        Self {
            zenith,
            rise: rise.to_local(tz_hours),
            set: set.to_local(tz_hours),
        }
    }

    /// Hours between rise and set, going forward from rise through midnight
    /// if needed. `None` when either event does not occur.
    pub fn span_hours(&self) -> Option<f64> {
        let (rise, set) = (self.rise.hour()?, self.set.hour()?);
        let span = set - rise;
        Some(if span < 0.0 { span + 24.0 } else { span })
    }
}

/// Sunrise/sunset and the three twilight grades for one place and day.
#[derive(Debug, Clone, PartialEq)]
pub struct TwilightTimes {
    pub date: NaiveDate,
    pub location: Location,
    pub official: RiseSet,
    pub civil: RiseSet,
    pub nautical: RiseSet,
    pub astronomical: RiseSet,
}

impl TwilightTimes {
    pub fn compute(location: &Location, date: NaiveDate) -> Self {
        Self {
            date,
            location: *location,
            official: RiseSet::compute(location, date, Zenith::OFFICIAL),
            civil: RiseSet::compute(location, date, Zenith::CIVIL),
            nautical: RiseSet::compute(location, date, Zenith::NAUTICAL),
            astronomical: RiseSet::compute(location, date, Zenith::ASTRONOMICAL),
        }
    }

    /// The four pairs from the brightest boundary to the darkest.
    pub fn pairs(&self) -> [&RiseSet; 4] {
        [&self.official, &self.civil, &self.nautical, &self.astronomical]
    }
}
