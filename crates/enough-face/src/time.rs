use chrono::{NaiveTime, Timelike};

/// Wall-clock snapshot consumed by the face: hour `0..24`, minute `0..60`.
///
/// Seconds are dropped; the face only changes once a minute.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Returns `None` when either component is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour: hour as u8, minute: minute as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    /// Hour on a 12-hour dial (`0..12`).
    #[inline]
    pub fn dial_hour(self) -> u32 {
        self.hour() % 12
    }
}

impl From<NaiveTime> for Time {
    fn from(t: NaiveTime) -> Self {
        // NaiveTime guarantees hour < 24 and minute < 60.
        Self { hour: t.hour() as u8, minute: t.minute() as u8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Time::new(24, 0).is_none());
        assert!(Time::new(0, 60).is_none());
        assert!(Time::new(23, 59).is_some());
    }

    #[test]
    fn dial_hour_wraps_at_twelve() {
        assert_eq!(Time::new(12, 0).unwrap().dial_hour(), 0);
        assert_eq!(Time::new(22, 10).unwrap().dial_hour(), 10);
    }

    #[test]
    fn seconds_are_dropped() {
        let t = Time::from(NaiveTime::from_hms_opt(7, 45, 31).unwrap());
        assert_eq!(t, Time::new(7, 45).unwrap());
    }
}
