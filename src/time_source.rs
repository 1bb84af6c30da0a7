//! Time source abstraction for real and pinned clocks.
//!
//! Commands ask this module for "now" instead of calling chrono directly so
//! that a run can be pinned to a fixed instant (`--at` on the command line,
//! or a test) and still go through the same code paths.

use chrono::{DateTime, Duration as ChronoDuration, NaiveDateTime, Utc};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration as StdDuration;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current instant
    fn now_utc(&self) -> DateTime<Utc>;

    /// Sleep for the specified duration (or pretend to)
    fn sleep(&self, duration: StdDuration);

    /// Check if this is a pinned time source
    fn is_simulated(&self) -> bool;
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// A clock pinned to an instant. Sleeping advances it without waiting.
pub struct FixedTimeSource {
    current: Mutex<DateTime<Utc>>,
}

impl FixedTimeSource {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    /// Pin a clock to a wall-clock reading taken as UTC.
    pub fn from_naive_utc(at: NaiveDateTime) -> Self {
        Self::new(at.and_utc())
    }
}

impl TimeSource for FixedTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sleep(&self, duration: StdDuration) {
        let step = ChronoDuration::from_std(duration).unwrap_or(ChronoDuration::zero());
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += step;
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Initialize the global time source (call once at startup)
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

fn source() -> &'static Arc<dyn TimeSource> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource))
}

/// Get the current instant from the global time source
pub fn now_utc() -> DateTime<Utc> {
    source().now_utc()
}

/// Sleep for the specified duration using the global time source
pub fn sleep(duration: StdDuration) {
    source().sleep(duration)
}

/// Check if we're running on a pinned clock
pub fn is_simulated() -> bool {
    source().is_simulated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_source_stays_put() {
        let source = FixedTimeSource::from_naive_utc(noon());
        assert_eq!(source.now_utc().naive_utc(), noon());
        assert_eq!(source.now_utc(), source.now_utc());
        assert!(source.is_simulated());
    }

    #[test]
    fn test_fixed_source_sleep_advances_instantly() {
        let source = FixedTimeSource::from_naive_utc(noon());
        let started = std::time::Instant::now();
        source.sleep(StdDuration::from_secs(90));

        assert!(started.elapsed() < StdDuration::from_secs(1));
        assert_eq!(
            source.now_utc().naive_utc(),
            noon() + ChronoDuration::seconds(90)
        );
    }

    #[test]
    fn test_local_time_comes_from_the_location_offset() {
        use crate::geo::Location;

        // UTC-4: local time is four hours behind the pinned instant
        let source = FixedTimeSource::from_naive_utc(noon());
        let new_york = Location::new(40.7, -74.0, 4 * 3600).unwrap();
        assert_eq!(
            new_york.local_datetime(source.now_utc()),
            noon() - ChronoDuration::hours(4)
        );
    }

    #[test]
    fn test_real_source_is_not_simulated() {
        assert!(!RealTimeSource.is_simulated());
    }
}
