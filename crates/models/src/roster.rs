use crate::session::Session;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A course as shown on scheduling screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    /// Short course code, e.g. "CS-201"
    pub code: String,
    /// Contracted teaching hours per week, display only
    pub weekly_hours: u8,
}

/// A course together with its scheduled sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSchedule {
    pub course: Course,
    pub sessions: Vec<Session>,
}

impl CourseSchedule {
    pub fn has_sessions(&self) -> bool {
        !self.sessions.is_empty()
    }
}

/// A teacher and the full schedule of every course they own
///
/// The counts below are derived on read; nothing here is cached across
/// schedule mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherWithCourses {
    pub id: Uuid,
    pub name: String,
    pub courses: Vec<CourseSchedule>,
}

impl TeacherWithCourses {
    pub fn total_courses(&self) -> usize {
        self.courses.len()
    }

    pub fn total_assigned_sessions(&self) -> usize {
        self.courses.iter().map(|c| c.sessions.len()).sum()
    }

    pub fn courses_with_at_least_one_session(&self) -> usize {
        self.courses.iter().filter(|c| c.has_sessions()).count()
    }
}
