use crate::roster::RosterFile;
use log::{debug, warn};
use models::conflict::{Conflict, ConflictReason, detect_conflict};
use models::roster::{Course, CourseSchedule, TeacherWithCourses};
use models::session::{Session, SessionDraft, SessionType, TimeSlot};
use models::weekday::Weekday;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Field-validated input for creating a session
///
/// Course ownership is not resolved yet; the store derives the teacher from
/// the course when the create runs.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub course_id: Uuid,
    pub day: Weekday,
    pub slot: TimeSlot,
    pub room: Option<String>,
    pub session_type: SessionType,
}

/// Custom error type for store operations
#[derive(Debug)]
pub enum StoreError {
    UnknownCourse(Uuid),
    UnknownTeacher(Uuid),
    UnknownSession(Uuid),
    /// The authoritative conflict check rejected the create
    Conflict { conflict: Conflict, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownCourse(id) => write!(f, "no course with id {id}"),
            Self::UnknownTeacher(id) => write!(f, "no teacher with id {id}"),
            Self::UnknownSession(id) => write!(f, "no session with id {id}"),
            Self::Conflict { message, .. } => write!(f, "{message}"),
        }
    }
}

struct TeacherRecord {
    id: Uuid,
    name: String,
}

struct CourseRecord {
    course: Course,
    teacher_id: Uuid,
}

struct State {
    teachers: Vec<TeacherRecord>,
    courses: Vec<CourseRecord>,
    sessions: Vec<Session>,
}

/// In-memory authoritative schedule state
///
/// The single source of truth for persisted sessions. Clients run the same
/// conflict detector against their own snapshot for immediate feedback, but
/// only the re-check inside [`ScheduleStore::create_session`], under the
/// write lock, decides: of two racing creates for a colliding slot, exactly
/// one wins and the other receives the conflict error.
pub struct ScheduleStore {
    state: RwLock<State>,
}

impl ScheduleStore {
    pub fn from_roster(roster: RosterFile) -> Self {
        let mut teachers = Vec::new();
        let mut courses = Vec::new();

        for teacher in roster.teachers {
            for course in teacher.courses {
                courses.push(CourseRecord {
                    course: Course {
                        id: course.id,
                        name: course.name,
                        code: course.code,
                        weekly_hours: course.weekly_hours,
                    },
                    teacher_id: teacher.id,
                });
            }

            teachers.push(TeacherRecord {
                id: teacher.id,
                name: teacher.name,
            });
        }

        Self {
            state: RwLock::new(State {
                teachers,
                courses,
                sessions: Vec::new(),
            }),
        }
    }

    /// Sessions of one course, ordered by day then start time
    pub fn sessions_for_course(&self, course_id: Uuid) -> Result<Vec<Session>, StoreError> {
        let state = self.read();
        state
            .courses
            .iter()
            .find(|c| c.course.id == course_id)
            .ok_or(StoreError::UnknownCourse(course_id))?;

        let mut sessions: Vec<Session> = state
            .sessions
            .iter()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.day, s.slot.start));

        Ok(sessions)
    }

    /// Every persisted session, ordered by day then start time
    pub fn all_sessions(&self) -> Vec<Session> {
        let mut sessions = self.read().sessions.clone();
        sessions.sort_by_key(|s| (s.day, s.slot.start));

        sessions
    }

    /// Flat session collection across an arbitrary set of courses
    ///
    /// Serves display contexts that are not ownership-scoped, e.g. a
    /// student's enrolled courses as known by the enrollment system.
    pub fn sessions_for_courses(&self, course_ids: &[Uuid]) -> Result<Vec<Session>, StoreError> {
        let state = self.read();
        for &course_id in course_ids {
            state
                .courses
                .iter()
                .find(|c| c.course.id == course_id)
                .ok_or(StoreError::UnknownCourse(course_id))?;
        }

        let mut sessions: Vec<Session> = state
            .sessions
            .iter()
            .filter(|s| course_ids.contains(&s.course_id))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.day, s.slot.start));

        Ok(sessions)
    }

    /// Flat session collection across all of a teacher's courses
    pub fn sessions_for_teacher(&self, teacher_id: Uuid) -> Result<Vec<Session>, StoreError> {
        let state = self.read();
        state
            .teachers
            .iter()
            .find(|t| t.id == teacher_id)
            .ok_or(StoreError::UnknownTeacher(teacher_id))?;

        let mut sessions: Vec<Session> = state
            .sessions
            .iter()
            .filter(|s| s.teacher_id == teacher_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.day, s.slot.start));

        Ok(sessions)
    }

    /// Creates a session after the authoritative conflict check
    ///
    /// Runs under the write lock against the current persisted state, so a
    /// stale client snapshot cannot smuggle in an overlapping session.
    pub fn create_session(&self, new: NewSession) -> Result<Session, StoreError> {
        let mut state = self.write();

        let teacher_id = state
            .courses
            .iter()
            .find(|c| c.course.id == new.course_id)
            .map(|c| c.teacher_id)
            .ok_or(StoreError::UnknownCourse(new.course_id))?;

        let draft = SessionDraft {
            course_id: new.course_id,
            teacher_id,
            day: new.day,
            slot: new.slot,
            room: new.room,
            session_type: new.session_type,
        };

        if let Some(conflict) = detect_conflict(&draft, &state.sessions) {
            let message = Self::conflict_message(&state, &conflict);
            warn!("rejected session for course {}: {message}", new.course_id);
            return Err(StoreError::Conflict { conflict, message });
        }

        let session = draft.into_session(Uuid::new_v4());
        debug!(
            "created session {} for course {} on {} {}",
            session.id, session.course_id, session.day, session.slot
        );
        state.sessions.push(session.clone());

        Ok(session)
    }

    /// Deletes a session by id
    ///
    /// Sessions are immutable; an edit is this followed by a fresh create.
    pub fn delete_session(&self, id: Uuid) -> Result<(), StoreError> {
        let mut state = self.write();
        let position = state
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::UnknownSession(id))?;

        state.sessions.remove(position);
        debug!("deleted session {id}");

        Ok(())
    }

    /// Roster-ordered snapshot of every teacher with their course schedules
    ///
    /// Direct input for completion classification and the board view.
    pub fn teachers_with_courses(&self) -> Vec<TeacherWithCourses> {
        let state = self.read();

        state
            .teachers
            .iter()
            .map(|teacher| TeacherWithCourses {
                id: teacher.id,
                name: teacher.name.clone(),
                courses: state
                    .courses
                    .iter()
                    .filter(|c| c.teacher_id == teacher.id)
                    .map(|record| {
                        let mut sessions: Vec<Session> = state
                            .sessions
                            .iter()
                            .filter(|s| s.course_id == record.course.id)
                            .cloned()
                            .collect();
                        sessions.sort_by_key(|s| (s.day, s.slot.start));

                        CourseSchedule {
                            course: record.course.clone(),
                            sessions,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    fn conflict_message(state: &State, conflict: &Conflict) -> String {
        let course_name = state
            .courses
            .iter()
            .find(|c| c.course.id == conflict.with.course_id)
            .map(|c| c.course.name.as_str())
            .unwrap_or("another course");
        let teacher_name = state
            .teachers
            .iter()
            .find(|t| t.id == conflict.with.teacher_id)
            .map(|t| t.name.as_str())
            .unwrap_or("another teacher");

        match conflict.reason {
            ConflictReason::SameTeacher => format!(
                "{teacher_name} already teaches {course_name} on {} from {}",
                conflict.with.day, conflict.with.slot
            ),
            ConflictReason::SameRoom => format!(
                "room {} is already taken by {course_name} on {} from {}",
                conflict.with.room.as_deref().unwrap_or("?"),
                conflict.with.day,
                conflict.with.slot
            ),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().expect("schedule state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().expect("schedule state lock poisoned")
    }
}
