// models/src/time.rs

use core::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ValidationError, ValidationResult};

/// A time of day stored as minutes since midnight.
///
/// Parses both the 24-hour form (`"17:30"`) and the 12-hour form the
/// administration screens submit (`"5:30 PM"`). Comparison is plain
/// minute ordering, which is all the overlap checker needs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a time of day from minutes since midnight.
    ///
    /// # Errors
    /// Returns a `ValidationError` if `minutes` does not fall within a
    /// single day.
    pub fn from_minutes(minutes: u16) -> ValidationResult<Self> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTime(format!("{} minutes", minutes)));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

fn parse_hour_minute(s: &str) -> Option<(u16, u16)> {
    let (h, m) = s.split_once(':')?;
    let hour = h.trim().parse().ok()?;
    let minute = m.trim().parse().ok()?;
    Some((hour, minute))
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let invalid = || ValidationError::InvalidTime(s.to_string());
        let trimmed = s.trim();

        // 12-hour form: "h:MM AM" / "h:MM PM".
        if let Some((clock, period)) = trimmed.rsplit_once(' ') {
            let (hour, minute) = parse_hour_minute(clock).ok_or_else(invalid)?;
            if !(1..=12).contains(&hour) || minute >= 60 {
                return Err(invalid());
            }
            let hour24 = match period.to_ascii_uppercase().as_str() {
                "AM" => {
                    if hour == 12 {
                        0
                    } else {
                        hour
                    }
                }
                "PM" => {
                    if hour == 12 {
                        12
                    } else {
                        hour + 12
                    }
                }
                _ => return Err(invalid()),
            };
            return Self::from_minutes(hour24 * 60 + minute).map_err(|_| invalid());
        }

        let (hour, minute) = parse_hour_minute(trimmed).ok_or_else(invalid)?;
        if hour >= 24 || minute >= 60 {
            return Err(invalid());
        }
        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A day of the week, as the scheduling screen names them.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        DayOfWeek::ALL
            .iter()
            .copied()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open interval `[start, end)` in minutes since midnight.
///
/// `end` may run past midnight for bookings whose duration crosses it,
/// so it is not constrained to a single day the way `TimeOfDay` is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// Creates an interval from two times on the same day.
    ///
    /// # Errors
    /// Returns a `ValidationError` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> ValidationResult<Self> {
        if start >= end {
            return Err(ValidationError::EndNotAfterStart);
        }
        Ok(Self {
            start: u32::from(start.minutes()),
            end: u32::from(end.minutes()),
        })
    }

    /// Creates an interval from a start time and a duration in minutes.
    ///
    /// # Errors
    /// Returns a `ValidationError` if `duration_minutes` is zero.
    pub fn from_start_duration(start: TimeOfDay, duration_minutes: u16) -> ValidationResult<Self> {
        if duration_minutes == 0 {
            return Err(ValidationError::EndNotAfterStart);
        }
        let start = u32::from(start.minutes());
        Ok(Self {
            start,
            end: start + u32::from(duration_minutes),
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// The interval intersection test. Two half-open intervals overlap
    /// iff each starts before the other ends; a shared boundary is not
    /// an overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Renders a duration the way the scheduling screen shows it:
/// `"8 hours 30 minutes"`, `"1 hour"`, `"45 minutes"`.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{} hour{}", hours, if hours > 1 { "s" } else { "" }));
    }
    if minutes > 0 {
        if hours > 0 {
            out.push(' ');
        }
        out.push_str(&format!(
            "{} minute{}",
            minutes,
            if minutes > 1 { "s" } else { "" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{DayOfWeek, Interval, TimeOfDay, format_duration};
    use crate::errors::ValidationError;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn should_parse_24_hour_times() {
        assert_eq!(t("00:00").minutes(), 0);
        assert_eq!(t("09:30").minutes(), 9 * 60 + 30);
        assert_eq!(t("23:59").minutes(), 23 * 60 + 59);
    }

    #[test]
    fn should_parse_12_hour_times() {
        assert_eq!(t("12:00 AM").minutes(), 0);
        assert_eq!(t("9:15 AM").minutes(), 9 * 60 + 15);
        assert_eq!(t("12:00 PM").minutes(), 12 * 60);
        assert_eq!(t("5:30 PM").minutes(), 17 * 60 + 30);
    }

    #[test]
    fn should_reject_malformed_times() {
        for bad in ["", "25:00", "09:60", "13:00 PM", "0:30 AM", "nine"] {
            assert!(bad.parse::<TimeOfDay>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn should_round_trip_display() {
        assert_eq!(t("5:30 PM").to_string(), "17:30");
        assert_eq!(t("17:30").to_string(), "17:30");
    }

    #[test]
    fn should_parse_days_case_insensitively() {
        assert_eq!("Monday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Monday);
        assert_eq!("sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Interval::new(t("09:00"), t("10:00")).unwrap();
        let b = Interval::new(t("09:30"), t("10:30")).unwrap();
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn touching_boundary_is_not_an_overlap() {
        let a = Interval::new(t("09:00"), t("10:00")).unwrap();
        let b = Interval::new(t("10:00"), t("11:00")).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn containment_is_an_overlap() {
        let outer = Interval::new(t("09:00"), t("11:00")).unwrap();
        let inner = Interval::new(t("10:00"), t("10:30")).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let a = Interval::new(t("09:00"), t("10:00")).unwrap();
        let b = Interval::new(t("11:00"), t("12:00")).unwrap();
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn should_reject_empty_interval() {
        assert_eq!(
            Interval::new(t("10:00"), t("10:00")).unwrap_err(),
            ValidationError::EndNotAfterStart
        );
        assert_eq!(
            Interval::new(t("11:00"), t("10:00")).unwrap_err(),
            ValidationError::EndNotAfterStart
        );
    }

    #[test]
    fn should_format_durations() {
        assert_eq!(format_duration(8 * 60 + 30), "8 hours 30 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(format_duration(61), "1 hour 1 minute");
    }
}
