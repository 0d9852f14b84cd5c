// models/src/schedule.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationResult;
use crate::resource::{Resource, require_non_empty};
use crate::time::{DayOfWeek, Interval, TimeOfDay, format_duration};

/// A rostered shift for one staff member on one day of the week.
/// `duration` is derived from the interval on every write; whatever the
/// client sent is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(default)]
    pub id: String,
    pub staff_id: String,
    pub name: String,
    pub position: String,
    pub shift: String,
    pub day: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub duration: String,
}

/// The scheduling form as submitted: every field a string, empty meaning
/// missing. Field presence is checked before anything is parsed so the
/// operator sees "All fields are required." rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShift {
    #[serde(default)]
    pub staff_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub duration: String,
}

impl Shift {
    /// Validates a submitted shift and builds the stored record:
    /// required fields, then time parsing, then the start < end
    /// invariant. The overlap check is a separate step because it needs
    /// the existing collection.
    pub fn from_new(new: NewShift) -> ValidationResult<Shift> {
        require_non_empty(&[
            &new.staff_id,
            &new.name,
            &new.position,
            &new.shift,
            &new.day,
            &new.start_time,
            &new.end_time,
        ])?;

        let day: DayOfWeek = new.day.parse()?;
        let start_time: TimeOfDay = new.start_time.parse()?;
        let end_time: TimeOfDay = new.end_time.parse()?;
        let interval = Interval::new(start_time, end_time)?;

        Ok(Shift {
            id: Uuid::new_v4().to_string(),
            staff_id: new.staff_id,
            name: new.name,
            position: new.position,
            shift: new.shift,
            day,
            start_time,
            end_time,
            duration: format_duration(interval.duration_minutes()),
        })
    }

    pub fn interval(&self) -> ValidationResult<Interval> {
        Interval::new(self.start_time, self.end_time)
    }

    /// Whether two shifts collide: same staff member, same day, and
    /// intersecting half-open intervals (each starts before the other
    /// ends).
    pub fn overlaps(&self, other: &Shift) -> bool {
        self.staff_id == other.staff_id
            && self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

/// Scans the existing roster for the first shift the candidate collides
/// with. Linear scan over the staff member's day, as the collection is
/// small and unindexed.
pub fn find_conflict<'a, I>(candidate: &Shift, existing: I) -> Option<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    existing.into_iter().find(|s| candidate.overlaps(s))
}

impl Resource for Shift {
    const COLLECTION: &'static str = "schedules";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.staff_id, &self.name, &self.position, &self.shift])?;
        Interval::new(self.start_time, self.end_time)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NewShift, Shift, find_conflict};
    use crate::errors::ValidationError;

    fn submission(staff_id: &str, day: &str, start: &str, end: &str) -> NewShift {
        NewShift {
            staff_id: staff_id.to_string(),
            name: "Alice Smith".to_string(),
            position: "Registered Nurse".to_string(),
            shift: "Morning".to_string(),
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            duration: String::new(),
        }
    }

    fn shift(staff_id: &str, day: &str, start: &str, end: &str) -> Shift {
        Shift::from_new(submission(staff_id, day, start, end)).unwrap()
    }

    #[test]
    fn missing_fields_reject_before_parsing() {
        let mut new = submission("S1", "NotADay", "09:00", "17:00");
        new.position = String::new();
        // The bogus day would fail to parse, but the required-field check
        // runs first.
        assert_eq!(
            Shift::from_new(new).unwrap_err(),
            ValidationError::MissingFields
        );
    }

    #[test]
    fn end_must_follow_start() {
        assert_eq!(
            Shift::from_new(submission("S1", "Monday", "17:00", "09:00")).unwrap_err(),
            ValidationError::EndNotAfterStart
        );
        assert_eq!(
            Shift::from_new(submission("S1", "Monday", "09:00", "09:00")).unwrap_err(),
            ValidationError::EndNotAfterStart
        );
    }

    #[test]
    fn duration_is_derived() {
        let s = shift("S1", "Monday", "09:00", "17:30");
        assert_eq!(s.duration, "8 hours 30 minutes");
    }

    #[test]
    fn twelve_hour_submissions_are_accepted() {
        let s = shift("S1", "Monday", "9:00 AM", "5:30 PM");
        assert_eq!(s.duration, "8 hours 30 minutes");
    }

    #[test]
    fn conflict_requires_same_staff_and_day() {
        let existing = [
            shift("S1", "Monday", "09:00", "17:00"),
            shift("S2", "Tuesday", "09:00", "17:00"),
        ];
        let other_staff = shift("S3", "Monday", "10:00", "11:00");
        assert!(find_conflict(&other_staff, &existing).is_none());

        let other_day = shift("S1", "Wednesday", "10:00", "11:00");
        assert!(find_conflict(&other_day, &existing).is_none());

        let clash = shift("S1", "Monday", "16:00", "18:00");
        assert!(find_conflict(&clash, &existing).is_some());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = shift("S1", "Monday", "09:00", "10:00");
        let b = shift("S1", "Monday", "09:30", "10:30");
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn back_to_back_shifts_do_not_conflict() {
        let morning = shift("S1", "Monday", "09:00", "10:00");
        let next = shift("S1", "Monday", "10:00", "11:00");
        assert!(!morning.overlaps(&next));
    }

    #[test]
    fn contained_shift_conflicts() {
        let long = shift("S1", "Monday", "09:00", "11:00");
        let contained = shift("S1", "Monday", "10:00", "10:30");
        assert!(long.overlaps(&contained));
    }
}
