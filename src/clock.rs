//! Time sources.
//!
//! The scan controller needs two clocks:
//!
//! - a monotonic millisecond counter for scan deadlines and animations
//!   ([`MonotonicClock`], backed by `std::time::Instant`);
//! - the local wall clock for the "Last Reading" card and the footer year
//!   (`chrono::Local`).

use core::fmt::{self, Write};
use std::time::Instant;

use chrono::{DateTime, Datelike, Local, TimeZone};
use heapless::String;

/// `Mar 07, 2030, 02:05:09 PM`
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y, %I:%M:%S %p";

/// Milliseconds since the clock was created.
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self { Self { start: Instant::now() } }

    #[inline]
    pub fn now_ms(&self) -> u64 { self.start.elapsed().as_millis() as u64 }
}

impl Default for MonotonicClock {
    fn default() -> Self { Self::new() }
}

/// Local wall-clock time.
#[inline]
pub fn now() -> DateTime<Local> { Local::now() }

/// Year for the footer copyright line.
pub fn current_year() -> i32 { Local::now().year() }

/// Format a reading timestamp for display.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String<32>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut s = String::new();
    let _ = write!(s, "{}", ts.format(TIMESTAMP_FORMAT));
    s
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_format_afternoon() {
        let ts = Utc.with_ymd_and_hms(2030, 3, 7, 14, 5, 9).unwrap();
        assert_eq!(format_timestamp(&ts).as_str(), "Mar 07, 2030, 02:05:09 PM");
    }

    #[test]
    fn test_format_midnight_is_twelve_am() {
        let ts = Utc.with_ymd_and_hms(2029, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts).as_str(), "Dec 31, 2029, 12:00:00 AM");
    }

    #[test]
    fn test_format_uses_local_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = offset.with_ymd_and_hms(2030, 7, 1, 9, 30, 0).unwrap();
        assert_eq!(
            format_timestamp(&ts).as_str(),
            "Jul 01, 2030, 09:30:00 AM",
            "wall time is shown in the timestamp's own zone"
        );
    }

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.now_ms() >= a + 5);
    }
}
