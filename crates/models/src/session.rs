use crate::weekday::Weekday;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{EnumIter, EnumString};
use uuid::Uuid;

/// Time-of-day format used at the API boundary
pub const TIME_FORMAT: &str = "%H:%M";

/// Custom error type for draft input that cannot form a schedulable session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DraftError {
    /// `start` is not strictly before `end`
    EmptyTimeSlot,
    /// A time string that is not `HH:MM`
    BadTimeFormat(String),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyTimeSlot => write!(f, "start time must be before end time"),
            Self::BadTimeFormat(s) => write!(f, "expected a HH:MM time, got {s:?}"),
        }
    }
}

/// Whether a session is the theory lecture or a practice group
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SessionType {
    Theory,
    Practice,
}

impl Display for SessionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Theory => write!(f, "theory"),
            Self::Practice => write!(f, "practice"),
        }
    }
}

/// Represents a half-open `[start, end)` time range within one day
///
/// Minute resolution; `start < end` holds for every constructed value, so a
/// slot can never be empty or wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Creates a new `TimeSlot` if `start` is before `end`
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, DraftError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(DraftError::EmptyTimeSlot)
        }
    }

    /// Parses two `HH:MM` strings and creates a `TimeSlot` if valid
    pub fn from_strings(start: &str, end: &str) -> Result<Self, DraftError> {
        let start = NaiveTime::parse_from_str(start, TIME_FORMAT)
            .map_err(|_| DraftError::BadTimeFormat(start.to_string()))?;
        let end = NaiveTime::parse_from_str(end, TIME_FORMAT)
            .map_err(|_| DraftError::BadTimeFormat(end.to_string()))?;

        Self::new(start, end)
    }

    /// Whether two slots overlap
    ///
    /// Half-open semantics: a slot ending at 10:00 does not overlap one
    /// starting at 10:00.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slot length in whole minutes
    pub fn duration_minutes(self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}-{}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// One scheduled occurrence of a course on a specific weekday and time slot
///
/// Immutable once persisted: an edit is a delete of the old id followed by a
/// fresh create, never an in-place change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub course_id: Uuid,
    /// Owner of the course at creation time, denormalized for conflict checks
    pub teacher_id: Uuid,
    pub day: Weekday,
    pub slot: TimeSlot,
    /// Free-text room label; `None` means no room assigned
    pub room: Option<String>,
    pub session_type: SessionType,
}

/// A candidate session that passed field validation but has no identity yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub day: Weekday,
    pub slot: TimeSlot,
    pub room: Option<String>,
    pub session_type: SessionType,
}

impl SessionDraft {
    /// Collapses blank room labels to "no room assigned"
    pub fn normalize_room(room: Option<String>) -> Option<String> {
        room.map(|r| r.trim().to_string()).filter(|r| !r.is_empty())
    }

    /// Promotes the draft to a persisted session with the assigned id
    pub fn into_session(self, id: Uuid) -> Session {
        Session {
            id,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            day: self.day,
            slot: self.slot,
            room: self.room,
            session_type: self.session_type,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_timeslot_new() {
        assert!(TimeSlot::new(at(9, 0), at(12, 0)).is_ok());
        assert_eq!(
            TimeSlot::new(at(12, 0), at(9, 0)),
            Err(DraftError::EmptyTimeSlot)
        );
        assert_eq!(
            TimeSlot::new(at(9, 0), at(9, 0)),
            Err(DraftError::EmptyTimeSlot)
        );
    }

    #[test]
    fn test_timeslot_from_strings() {
        let slot = TimeSlot::from_strings("09:30", "10:50").unwrap();
        assert_eq!(slot.start, at(9, 30));
        assert_eq!(slot.end, at(10, 50));
        assert_eq!(slot.duration_minutes(), 80);

        assert_eq!(
            TimeSlot::from_strings("not a time", "10:50"),
            Err(DraftError::BadTimeFormat("not a time".to_string()))
        );
        assert_eq!(
            TimeSlot::from_strings("11:00", "09:00"),
            Err(DraftError::EmptyTimeSlot)
        );
    }

    #[test]
    fn test_timeslot_overlap_is_half_open() {
        let morning = TimeSlot::from_strings("08:00", "10:00").unwrap();
        let mid = TimeSlot::from_strings("09:00", "11:00").unwrap();
        let next = TimeSlot::from_strings("10:00", "12:00").unwrap();

        assert!(morning.overlaps(mid));
        assert!(mid.overlaps(morning));
        // Back-to-back slots share only the boundary instant
        assert!(!morning.overlaps(next));
        assert!(!next.overlaps(morning));
    }

    #[test]
    fn test_timeslot_display() {
        let slot = TimeSlot::from_strings("08:00", "10:30").unwrap();
        assert_eq!(slot.to_string(), "08:00-10:30");
    }

    #[test]
    fn test_normalize_room() {
        assert_eq!(
            SessionDraft::normalize_room(Some("301".to_string())),
            Some("301".to_string())
        );
        assert_eq!(
            SessionDraft::normalize_room(Some("  301  ".to_string())),
            Some("301".to_string())
        );
        assert_eq!(SessionDraft::normalize_room(Some("   ".to_string())), None);
        assert_eq!(SessionDraft::normalize_room(None), None);
    }

    #[test]
    fn test_session_type_from_str() {
        use std::str::FromStr;

        assert_eq!(SessionType::from_str("theory").unwrap(), SessionType::Theory);
        assert_eq!(
            SessionType::from_str("Practice").unwrap(),
            SessionType::Practice
        );
        assert!(SessionType::from_str("lab").is_err());
    }
}
