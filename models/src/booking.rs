// models/src/booking.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ValidationError, ValidationResult};
use crate::resource::{Resource, require_non_empty};
use crate::time::{Interval, TimeOfDay};

/// A service booking: a staff member delivering a service on a calendar
/// date for a whole number of minutes. The occupied interval is
/// `[time, time + duration)`, which may run past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: String,
    pub service: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration: u16,
    pub staff: String,
}

/// The booking form as submitted: all strings, duration included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBooking {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub staff: String,
}

impl Booking {
    pub fn from_new(new: NewBooking) -> ValidationResult<Booking> {
        require_non_empty(&[&new.service, &new.date, &new.time, &new.duration, &new.staff])?;

        let date = NaiveDate::parse_from_str(new.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(new.date.clone()))?;
        let time: TimeOfDay = new.time.parse()?;
        let duration: u16 = new
            .duration
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidDuration(new.duration.clone()))?;
        if duration == 0 {
            return Err(ValidationError::InvalidDuration(new.duration));
        }

        Ok(Booking {
            id: Uuid::new_v4().to_string(),
            service: new.service,
            date,
            time,
            duration,
            staff: new.staff,
        })
    }

    pub fn interval(&self) -> ValidationResult<Interval> {
        Interval::from_start_duration(self.time, self.duration)
    }

    /// Whether two bookings collide: same staff member, same date, and
    /// intersecting half-open intervals.
    pub fn overlaps(&self, other: &Booking) -> bool {
        if self.staff != other.staff || self.date != other.date {
            return false;
        }
        match (self.interval(), other.interval()) {
            (Ok(a), Ok(b)) => a.overlaps(&b),
            _ => false,
        }
    }
}

/// First existing booking the candidate collides with, if any.
pub fn find_conflict<'a, I>(candidate: &Booking, existing: I) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    existing.into_iter().find(|b| candidate.overlaps(b))
}

impl Resource for Booking {
    const COLLECTION: &'static str = "bookings";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.service, &self.staff])?;
        if self.duration == 0 {
            return Err(ValidationError::InvalidDuration("0".to_string()));
        }
        Ok(())
    }
}
