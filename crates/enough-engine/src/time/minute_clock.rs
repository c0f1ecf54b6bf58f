use std::time::Duration;

use chrono::{NaiveTime, Timelike};

/// Frame stamp handed to the app with each frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Reports wall-clock time once per minute.
///
/// The clock remembers the last minute it delivered and stays silent until
/// the wall time moves into a different minute. Seconds are ignored, so
/// polling more often than once a minute is harmless.
#[derive(Debug, Clone, Default)]
pub struct MinuteClock {
    last: Option<(u32, u32)>,
}

impl MinuteClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(now)` when `now` falls in a minute not yet delivered.
    pub fn poll(&mut self, now: NaiveTime) -> Option<NaiveTime> {
        let key = (now.hour(), now.minute());
        if self.last == Some(key) {
            return None;
        }
        self.last = Some(key);
        Some(now)
    }

    /// Time left until the next minute boundary.
    ///
    /// Never zero, so callers can use it directly as a sleep/timeout.
    pub fn until_next_minute(now: NaiveTime) -> Duration {
        // nanosecond() exceeds 1e9 during a leap second; saturate instead of wrapping.
        let elapsed = Duration::from_secs(now.second() as u64)
            + Duration::from_nanos(now.nanosecond() as u64);
        Duration::from_secs(60)
            .saturating_sub(elapsed)
            .max(Duration::from_millis(1))
    }
}

/// Current local wall time.
pub fn local_now() -> NaiveTime {
    chrono::Local::now().time()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    // ── poll ──────────────────────────────────────────────────────────────

    #[test]
    fn first_poll_always_fires() {
        let mut clock = MinuteClock::new();
        assert_eq!(clock.poll(hms(10, 10, 42)), Some(hms(10, 10, 42)));
    }

    #[test]
    fn same_minute_is_silent() {
        let mut clock = MinuteClock::new();
        clock.poll(hms(10, 10, 0));
        assert_eq!(clock.poll(hms(10, 10, 59)), None);
    }

    #[test]
    fn next_minute_fires_again() {
        let mut clock = MinuteClock::new();
        clock.poll(hms(10, 10, 59));
        assert!(clock.poll(hms(10, 11, 0)).is_some());
    }

    #[test]
    fn same_minute_of_another_hour_fires() {
        let mut clock = MinuteClock::new();
        clock.poll(hms(9, 30, 0));
        assert!(clock.poll(hms(10, 30, 0)).is_some());
    }

    // ── until_next_minute ─────────────────────────────────────────────────

    #[test]
    fn wait_counts_down_to_boundary() {
        assert_eq!(MinuteClock::until_next_minute(hms(8, 0, 45)), Duration::from_secs(15));
        assert_eq!(MinuteClock::until_next_minute(hms(8, 0, 0)), Duration::from_secs(60));
    }

    #[test]
    fn wait_is_never_zero() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(MinuteClock::until_next_minute(leap), Duration::from_millis(1));
    }
}
