//! Lunar phase for the face's moon glyph.
//!
//! A simple mean-lunation estimate: days since a known new moon divided by the
//! synodic month. Good to within a day, which is all a glyph needs.

use chrono::{Datelike, NaiveDate};

/// Mean synodic month in days.
const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian day number of the reference new moon (2000-01-06).
const REFERENCE_NEW_MOON: f64 = 2451550.1;

/// Number of distinct phase steps; also the size of the moon glyph font.
pub const PHASE_STEPS: u8 = 28;

/// Phase of the moon as an index in `0..PHASE_STEPS`: 0 is new, 14 is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonPhase(u8);

impl MoonPhase {
    /// Phase seen from the given latitude on the given UTC date.
    ///
    /// South of the equator the lit side is mirrored, so the waxing and waning
    /// halves swap.
    pub fn on(date_utc: NaiveDate, latitude: f64) -> Self {
        let index = phase_index(julian_day_number(date_utc));
        if index > 0 && latitude < 0.0 {
            MoonPhase(PHASE_STEPS - index)
        } else {
            MoonPhase(index)
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Character of the moon-phase font showing this phase.
    ///
    /// The font puts full at `'0'`, new at `'1'`, waxing phases at `'a'..` and
    /// waning phases at `'o'..`.
    pub fn glyph(self) -> char {
        let code = match self.0 {
            14 => 48,
            0 => 49,
            n if n < 14 => n + 96,
            n => n + 95,
        };
        char::from(code)
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "new moon",
            1..=6 => "waxing crescent",
            7 => "first quarter",
            8..=12 => "waxing gibbous",
            13 | 14 => "full moon",
            15..=20 => "waning gibbous",
            21 => "last quarter",
            _ => "waning crescent",
        }
    }
}

/// Astronomical Julian day number of a Gregorian date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    let mut year = date.year() as i64;
    let mut month = date.month() as i64;
    let day = date.day() as i64;

    if month < 3 {
        month += 12;
        year -= 1;
    }

    let a = year.div_euclid(100);
    let b = a.div_euclid(4);
    let c = 2 - a + b;
    let e = (365.25 * (year + 4716) as f64) as i64;
    let f = (30.6001 * (month + 1) as f64) as i64;

    c + day + e + f - 1524
}

/// Scale the fraction of the current lunation onto `0..PHASE_STEPS`.
fn phase_index(jdn: i64) -> u8 {
    let lunations = (jdn as f64 - REFERENCE_NEW_MOON) / SYNODIC_MONTH;
    let fraction = lunations.rem_euclid(1.0);
    let index = (fraction * (PHASE_STEPS - 1) as f64 + 0.5) as u8;
    index.min(PHASE_STEPS - 1)
}
