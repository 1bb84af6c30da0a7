#[cfg(test)]
mod ephemeris_tests {
    use crate::geo::ephemeris::*;

    fn hour(time: RiseSetTime) -> f64 {
        time.hour().expect("expected the event to occur")
    }

    /// Day-of-year formula across leap and common years.
    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2023, 1, 1), 1);
        assert_eq!(day_of_year(2023, 3, 1), 60);
        assert_eq!(day_of_year(2024, 3, 1), 61);
        assert_eq!(day_of_year(2023, 12, 31), 365);
        assert_eq!(day_of_year(2024, 12, 31), 366);
        assert_eq!(day_of_year(2024, 6, 21), 173);
    }

    /// At the equator on an equinox day and night are both about twelve hours
    /// and centred on noon. The equation of time moves noon by ~7.5 minutes.
    #[test]
    fn test_equinox_at_equator_is_symmetric() {
        for (month, day) in [(3, 20), (9, 22)] {
            let rise = hour(sunrise(2024, month, day, 0.0, 0.0, Zenith::OFFICIAL));
            let set = hour(sunset(2024, month, day, 0.0, 0.0, Zenith::OFFICIAL));

            let midpoint = (rise + set) / 2.0;
            assert!(
                (midpoint - 12.0).abs() < 0.15,
                "midpoint {midpoint} for {month}/{day}"
            );
            assert!((set - rise - 12.1).abs() < 0.1, "day length {}", set - rise);
        }
    }

    #[test]
    fn test_polar_night_has_no_sunrise() {
        assert_eq!(
            sunrise(2024, 12, 21, 70.0, 0.0, Zenith::OFFICIAL),
            RiseSetTime::Never
        );
        assert_eq!(
            sunset(2024, 12, 21, 70.0, 0.0, Zenith::OFFICIAL),
            RiseSetTime::Never
        );

        // Civil twilight still happens at 70°N in midwinter
        assert!(!sunrise(2024, 12, 21, 70.0, 0.0, Zenith::CIVIL).is_never());
    }

    #[test]
    fn test_midnight_sun_has_no_sunset() {
        for zenith in [
            Zenith::OFFICIAL,
            Zenith::CIVIL,
            Zenith::NAUTICAL,
            Zenith::ASTRONOMICAL,
        ] {
            assert!(sunset(2024, 6, 21, 70.0, 0.0, zenith).is_never());
        }
    }

    /// White nights: at 60°N in June the sun never gets 12° below the horizon.
    #[test]
    fn test_white_nights_drop_deeper_twilights_only() {
        assert!(!sunrise(2024, 6, 21, 60.0, 0.0, Zenith::CIVIL).is_never());
        assert!(sunrise(2024, 6, 21, 60.0, 0.0, Zenith::NAUTICAL).is_never());
        assert!(sunset(2024, 6, 21, 60.0, 0.0, Zenith::ASTRONOMICAL).is_never());
    }

    /// Deeper twilight begins earlier in the morning and ends later at night.
    #[test]
    fn test_twilight_ordering_by_zenith() {
        let zeniths = [
            Zenith::OFFICIAL,
            Zenith::CIVIL,
            Zenith::NAUTICAL,
            Zenith::ASTRONOMICAL,
        ];
        let rises: Vec<f64> = zeniths
            .iter()
            .map(|z| hour(sunrise(2024, 1, 1, 51.5, -0.13, *z)))
            .collect();
        let sets: Vec<f64> = zeniths
            .iter()
            .map(|z| hour(sunset(2024, 1, 1, 51.5, -0.13, *z)))
            .collect();

        assert!(rises.windows(2).all(|w| w[1] <= w[0]), "rises {rises:?}");
        assert!(sets.windows(2).all(|w| w[1] >= w[0]), "sets {sets:?}");
    }

    /// London on new year's day: sunrise ~08:06, sunset ~16:02 UTC.
    #[test]
    fn test_london_winter_reference() {
        let rise = hour(sunrise(2024, 1, 1, 51.5, -0.13, Zenith::OFFICIAL));
        let set = hour(sunset(2024, 1, 1, 51.5, -0.13, Zenith::OFFICIAL));
        assert!((rise - 8.1).abs() < 0.1, "rise {rise}");
        assert!((set - 16.03).abs() < 0.1, "set {set}");
    }

    #[test]
    fn test_results_are_in_day_range() {
        for longitude in [-180.0, -120.0, -74.0, 0.0, 45.0, 139.7, 180.0] {
            for month in 1..=12 {
                for want_set in [false, true] {
                    let time = solve(2025, month, 15, 35.0, longitude, want_set, Zenith::CIVIL);
                    let value = hour(time);
                    assert!((0.0..24.0).contains(&value), "{value} at {longitude}");
                }
            }
        }
    }

    #[test]
    fn test_zenith_labels() {
        assert_eq!(Zenith::OFFICIAL.label(), "sunrise/sunset");
        assert_eq!(Zenith::ASTRONOMICAL.label(), "astronomical twilight");
        assert_eq!(Zenith(100.0).label(), "custom zenith");
        assert!((Zenith::OFFICIAL.degrees() - 90.8333).abs() < 1e-3);
    }
}

#[cfg(test)]
mod timezone_tests {
    use crate::geo::ephemeris::RiseSetTime;
    use crate::geo::timezone::*;

    #[test]
    fn test_zero_offset_is_identity() {
        for value in [0.0, 0.25, 6.5, 12.0, 23.99] {
            assert_eq!(
                adjust_timezone(RiseSetTime::Hour(value), 0.0),
                RiseSetTime::Hour(value)
            );
        }
    }

    #[test]
    fn test_never_passes_through() {
        for offset in [-12.0, -4.0, 0.0, 5.5, 14.0] {
            assert_eq!(RiseSetTime::Never.to_local(offset), RiseSetTime::Never);
        }
    }

    #[test]
    fn test_wraps_once_around_midnight() {
        assert_eq!(RiseSetTime::Hour(0.5).to_local(-4.0), RiseSetTime::Hour(20.5));
        assert_eq!(RiseSetTime::Hour(22.0).to_local(3.0), RiseSetTime::Hour(1.0));
        assert_eq!(RiseSetTime::Hour(20.0).to_local(4.0), RiseSetTime::Hour(0.0));
    }

    #[test]
    fn test_phone_offset_sign_convention() {
        // New York in summer: local + 4h = UTC
        assert_eq!(tz_hours_from_utc_offset(4 * 3600), -4.0);
        // India: local - 5.5h = UTC
        assert_eq!(tz_hours_from_utc_offset(-19800), 5.5);
    }
}

#[cfg(test)]
mod times_tests {
    use crate::geo::{Location, TwilightTimes};
    use chrono::NaiveDate;

    /// New York on the June solstice, local daylight time.
    #[test]
    fn test_new_york_solstice() {
        let nyc = Location::new(40.7, -74.0, 4 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let times = TwilightTimes::compute(&nyc, date);

        let rise = times.official.rise.hour().unwrap();
        let set = times.official.set.hour().unwrap();
        assert!((rise - 5.42).abs() < 0.15, "sunrise {rise}");
        assert!((set - 20.51).abs() < 0.15, "sunset {set}");

        let civil = times.civil.span_hours().unwrap();
        let official = times.official.span_hours().unwrap();
        assert!(civil > official);
    }

    /// The solver is handed the local calendar date. For a place far from
    /// Greenwich, a local date and the UTC date it maps to at local midnight
    /// differ, and the result is the local date's pair. Kept as-is: the shift
    /// is at most a few minutes of sunrise drift per day.
    #[test]
    fn test_local_date_is_used_for_solver_fields() {
        let tokyo = Location::new(35.68, 139.69, -9 * 3600).unwrap();
        let local_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let times = TwilightTimes::compute(&tokyo, local_date);

        let rise_utc = crate::geo::sunrise(2024, 3, 1, 35.68, 139.69, crate::geo::Zenith::OFFICIAL);
        assert_eq!(times.official.rise, rise_utc.to_local(9.0));
    }

    #[test]
    fn test_polar_span_is_none() {
        let tromso = Location::new(69.65, 18.96, -3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let times = TwilightTimes::compute(&tromso, date);
        assert_eq!(times.official.span_hours(), None);
        assert!(times.astronomical.span_hours().is_some());
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new(91.0, 0.0, 0).is_err());
        assert!(Location::new(-90.5, 0.0, 0).is_err());
        assert!(Location::new(0.0, 180.5, 0).is_err());
        assert!(Location::new(0.0, 0.0, 15 * 3600).is_err());
        assert!(Location::new(-90.0, -180.0, -14 * 3600).is_ok());
    }

    #[test]
    fn test_local_datetime_applies_offset() {
        let nyc = Location::new(40.7, -74.0, 4 * 3600).unwrap();
        let utc = NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap()
            .and_utc();

        // 02:30 UTC is still the previous evening in New York
        let local = nyc.local_datetime(utc);
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(local.format("%H:%M").to_string(), "22:30");
    }
}

#[cfg(test)]
mod moon_tests {
    use crate::geo::moon::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_julian_day_number() {
        assert_eq!(julian_day_number(date(2000, 1, 1)), 2451545);
        assert_eq!(julian_day_number(date(2024, 1, 11)), 2460321);
    }

    #[test]
    fn test_known_phases() {
        assert_eq!(MoonPhase::on(date(2024, 1, 11), 40.0).index(), 0);
        assert_eq!(MoonPhase::on(date(2024, 1, 18), 40.0).index(), 7);
        assert_eq!(MoonPhase::on(date(2024, 1, 25), 40.0).name(), "full moon");
    }

    #[test]
    fn test_southern_hemisphere_mirrors_phase() {
        assert_eq!(MoonPhase::on(date(2024, 1, 18), -33.9).index(), 21);
        // New moon looks the same everywhere
        assert_eq!(MoonPhase::on(date(2024, 1, 11), -33.9).index(), 0);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(MoonPhase::on(date(2024, 1, 11), 0.0).glyph(), '1');
        assert_eq!(MoonPhase::on(date(2024, 1, 18), 10.0).glyph(), 'g');
        assert_eq!(MoonPhase::on(date(2024, 1, 18), -10.0).glyph(), 't');
    }
}

#[cfg(test)]
mod display_tests {
    use crate::geo::display::*;
    use crate::geo::ephemeris::RiseSetTime;

    #[test]
    fn test_twenty_four_hour_text() {
        assert_eq!(
            format_clock_time(RiseSetTime::Hour(5.42), ClockStyle::TwentyFourHour),
            "05:25"
        );
        assert_eq!(
            format_clock_time(RiseSetTime::Hour(20.51), ClockStyle::TwentyFourHour),
            "20:30"
        );
    }

    #[test]
    fn test_twelve_hour_text() {
        assert_eq!(
            format_clock_time(RiseSetTime::Hour(20.51), ClockStyle::TwelveHour),
            "8:30"
        );
        assert_eq!(
            format_clock_time(RiseSetTime::Hour(0.5), ClockStyle::TwelveHour),
            "12:30"
        );
    }

    #[test]
    fn test_minutes_truncate() {
        assert_eq!(
            format_clock_time(RiseSetTime::Hour(5.999), ClockStyle::TwentyFourHour),
            "05:59"
        );
    }

    #[test]
    fn test_never_text() {
        assert_eq!(
            format_clock_time(RiseSetTime::Never, ClockStyle::TwelveHour),
            NO_TIME_TEXT
        );
    }
}
