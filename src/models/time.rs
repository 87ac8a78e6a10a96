//! Clock times, teaching intervals, and day parts.
//!
//! Slot catalogs are built from [`Interval`] values parsed from strict
//! `HH:MM-HH:MM` strings; intervals serialize back to the same form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrorKind};

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Builds a time of day. Returns `None` outside the 24-hour clock.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: u16::from(hour) * 60 + u16::from(minute),
            })
        } else {
            None
        }
    }

    /// Parses strict `HH:MM`: two digits each, 24-hour clock.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let malformed = || {
            ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!("malformed clock time '{text}': expected HH:MM"),
            )
        };

        let (h, m) = text.split_once(':').ok_or_else(malformed)?;
        let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(h) || !two_digits(m) {
            return Err(malformed());
        }
        let hour: u8 = h.parse().map_err(|_| malformed())?;
        let minute: u8 = m.parse().map_err(|_| malformed())?;
        Self::new(hour, minute).ok_or_else(malformed)
    }

    /// Hour on the 24-hour clock.
    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Minute within the hour.
    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A teaching period, e.g. `08:00-10:00`.
///
/// Parsing requires `start` strictly before `end`; catalogs therefore never
/// contain empty or reversed periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    /// First minute of the period.
    pub start: ClockTime,
    /// First minute after the period.
    pub end: ClockTime,
}

impl Interval {
    /// Parses strict `HH:MM-HH:MM`.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let (start, end) = text.split_once('-').ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!("malformed interval '{text}': expected HH:MM-HH:MM"),
            )
        })?;
        let start = ClockTime::parse(start)?;
        let end = ClockTime::parse(end)?;
        if start >= end {
            return Err(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!("interval '{text}' must end after it starts"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Whether two intervals share any minute.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl TryFrom<String> for Interval {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Interval::parse(&value)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

/// Which half of the teaching day a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    /// Before midday.
    Morning,
    /// After midday.
    Afternoon,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ClockTime ----

    #[test]
    fn test_clock_time_parse() {
        let t = ClockTime::parse("08:30").unwrap();
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "08:30");
    }

    #[test]
    fn test_clock_time_rejects_loose_formats() {
        for bad in ["8:00", "08:0", "0800", "08-00", "ab:cd", " 8:00", "+8:00", ""] {
            assert!(ClockTime::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_clock_time_rejects_out_of_range() {
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("10:60").is_err());
        assert!(ClockTime::new(24, 0).is_none());
        assert_eq!(ClockTime::new(23, 59).unwrap().to_string(), "23:59");
    }

    #[test]
    fn test_clock_time_ordering() {
        let a = ClockTime::parse("08:00").unwrap();
        let b = ClockTime::parse("10:00").unwrap();
        assert!(a < b);
    }

    // ---- Interval ----

    #[test]
    fn test_interval_parse_round_trip() {
        let i = Interval::parse("08:00-10:00").unwrap();
        assert_eq!(i.to_string(), "08:00-10:00");
    }

    #[test]
    fn test_interval_rejects_reversed_or_empty() {
        assert!(Interval::parse("10:00-08:00").is_err());
        assert!(Interval::parse("10:00-10:00").is_err());
        assert!(Interval::parse("10:00").is_err());
        assert!(Interval::parse("10:00-").is_err());
    }

    #[test]
    fn test_interval_overlaps() {
        let a = Interval::parse("08:00-10:00").unwrap();
        let b = Interval::parse("09:00-11:00").unwrap();
        let c = Interval::parse("10:00-12:00").unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Back-to-back periods share no minute.
        assert!(!a.overlaps(&c));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_interval_serde_as_string() {
        let i: Interval = serde_json::from_str("\"13:30-15:30\"").unwrap();
        assert_eq!(i, Interval::parse("13:30-15:30").unwrap());
        assert_eq!(serde_json::to_string(&i).unwrap(), "\"13:30-15:30\"");

        let bad: Result<Interval, _> = serde_json::from_str("\"13:30\"");
        assert!(bad.is_err());
    }

    // ---- DayPart ----

    #[test]
    fn test_day_part_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&DayPart::Morning).unwrap(),
            "\"morning\""
        );
        let p: DayPart = serde_json::from_str("\"afternoon\"").unwrap();
        assert_eq!(p, DayPart::Afternoon);
    }
}
