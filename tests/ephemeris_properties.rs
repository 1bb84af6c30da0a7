//! Property tests for the almanac solver and the local-time conversion.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use twilight_clock::geo::{Location, RiseSetTime, TwilightTimes, Zenith, sunrise, sunset};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2060, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

fn hour_of(time: RiseSetTime) -> f64 {
    time.hour().expect("expected a rise or set at this latitude")
}

proptest! {
    /// Outside the polar circles the sun rises and sets every day, and near
    /// the prime meridian the UTC result lands inside the day.
    #[test]
    fn test_official_events_exist_at_mid_latitudes(
        date in date_strategy(),
        lat in -60.0f64..60.0,
        lon in -30.0f64..30.0,
    ) {
        let (y, m, d) = (date.year(), date.month(), date.day());
        for time in [
            sunrise(y, m, d, lat, lon, Zenith::OFFICIAL),
            sunset(y, m, d, lat, lon, Zenith::OFFICIAL),
        ] {
            let hour = hour_of(time);
            prop_assert!((0.0..24.0).contains(&hour), "hour {hour} out of range");
        }
    }

    /// A deeper zenith is reached earlier in the morning and later at night.
    #[test]
    fn test_deeper_zenith_widens_the_day(
        date in date_strategy(),
        lat in -40.0f64..40.0,
        lon in -15.0f64..0.0,
    ) {
        let location = Location::new(lat, lon, 0).unwrap();
        let times = TwilightTimes::compute(&location, date);
        let pairs = times.pairs();

        for window in pairs.windows(2) {
            let (lighter, darker) = (window[0], window[1]);
            prop_assert!(hour_of(darker.rise) <= hour_of(lighter.rise));
            prop_assert!(hour_of(darker.set) >= hour_of(lighter.set));
        }
    }

    /// Shifting by a UTC offset moves every event by the same amount, modulo
    /// a day, and never turns an event into a non-event or back.
    #[test]
    fn test_offset_shifts_every_event(
        date in date_strategy(),
        lat in -75.0f64..75.0,
        lon in -180.0f64..180.0,
        offset_hours in -12i32..=14,
    ) {
        let utc = TwilightTimes::compute(&Location::new(lat, lon, 0).unwrap(), date);
        let shifted = TwilightTimes::compute(
            &Location::new(lat, lon, -offset_hours * 3600).unwrap(),
            date,
        );

        for (a, b) in utc.pairs().iter().zip(shifted.pairs()) {
            for (before, after) in [(a.rise, b.rise), (a.set, b.set)] {
                prop_assert_eq!(before.is_never(), after.is_never());
                if let (Some(x), Some(y)) = (before.hour(), after.hour()) {
                    let diff = (y - x - offset_hours as f64).rem_euclid(24.0);
                    prop_assert!(diff < 1e-9 || diff > 24.0 - 1e-9, "diff {diff}");
                }
            }
        }
    }

    #[test]
    fn test_to_local_keeps_never(tz in -14.0f64..14.0) {
        prop_assert_eq!(RiseSetTime::Never.to_local(tz), RiseSetTime::Never);
    }

    #[test]
    fn test_to_local_zero_is_identity(hour in 0.0f64..24.0) {
        prop_assert_eq!(RiseSetTime::Hour(hour).to_local(0.0), RiseSetTime::Hour(hour));
    }
}
