//! Transaction deadlines.
//!
//! On the wire a deadline is a u64 count of milliseconds since the nemesis
//! block epoch, not since the Unix epoch. `create` captures "now plus a
//! window" from the system clock; `from_raw` rebuilds a decoded value
//! without touching the clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Unix milliseconds of the nemesis block (2016-04-01T00:00:00Z).
pub const NEMESIS_EPOCH_MS: u64 = 1_459_468_800_000;

/// The default deadline window, in hours.
pub const DEFAULT_DEADLINE_HOURS: i64 = 2;

/// A transaction deadline in milliseconds since the nemesis epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(u64);

impl Deadline {
    /// Create a deadline the given number of hours from now.
    pub fn create(hours: i64) -> Self {
        Self::from_duration(Duration::hours(hours))
    }

    /// Create a deadline the default window (2 hours) from now.
    pub fn default_window() -> Self {
        Self::create(DEFAULT_DEADLINE_HOURS)
    }

    /// Create a deadline an arbitrary duration from now.
    pub fn from_duration(window: Duration) -> Self {
        let now_ms = Utc::now().timestamp_millis() as u64;
        let window_ms = window.num_milliseconds().max(0) as u64;
        Deadline(now_ms - NEMESIS_EPOCH_MS + window_ms)
    }

    /// Rebuild a deadline from its wire value.
    pub fn from_raw(value: u64) -> Self {
        Deadline(value)
    }

    /// The wire value: milliseconds since the nemesis epoch.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The deadline as a UTC timestamp.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt((self.0 + NEMESIS_EPOCH_MS) as i64)
            .single()
            .expect("deadline milliseconds are within chrono's range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_after_now() {
        let deadline = Deadline::create(2);
        let now_offset = Utc::now().timestamp_millis() as u64 - NEMESIS_EPOCH_MS;
        assert!(deadline.value() > now_offset);
        assert!(deadline.value() <= now_offset + 2 * 3_600_000 + 1_000);
    }

    #[test]
    fn test_from_raw_roundtrip() {
        let deadline = Deadline::from_raw(100_000_000);
        assert_eq!(deadline.value(), 100_000_000);
    }

    #[test]
    fn test_to_datetime_offsets_from_nemesis() {
        let deadline = Deadline::from_raw(0);
        assert_eq!(deadline.to_datetime().timestamp_millis() as u64, NEMESIS_EPOCH_MS);
    }

    #[test]
    fn test_default_window_is_two_hours() {
        let explicit = Deadline::create(2);
        let default = Deadline::default_window();
        // Both sampled "now"; allow a small scheduling delta.
        assert!(default.value().abs_diff(explicit.value()) < 1_000);
    }
}
