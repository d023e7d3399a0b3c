use crate::dtos::session::SessionResponse;
use models::completion::{CompletionBoard, CompletionState, classify};
use models::roster::{CourseSchedule, TeacherWithCourses};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// The three-column completion board
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardResponse {
    pub no_schedule: Vec<TeacherBoardEntry>,
    pub in_progress: Vec<TeacherBoardEntry>,
    pub complete: Vec<TeacherBoardEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherBoardEntry {
    pub id: Uuid,
    pub name: String,
    /// "no_schedule", "in_progress" or "complete"
    pub completion_state: String,
    pub total_courses: usize,
    pub total_assigned_sessions: usize,
    pub courses_with_sessions: usize,
    pub courses: Vec<CourseScheduleResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseScheduleResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub weekly_hours: u8,
    pub sessions: Vec<SessionResponse>,
}

impl From<TeacherWithCourses> for TeacherBoardEntry {
    fn from(teacher: TeacherWithCourses) -> Self {
        let completion_state = match classify(&teacher) {
            CompletionState::NoSchedule => "no_schedule",
            CompletionState::InProgress => "in_progress",
            CompletionState::Complete => "complete",
        };

        Self {
            id: teacher.id,
            name: teacher.name.clone(),
            completion_state: completion_state.to_string(),
            total_courses: teacher.total_courses(),
            total_assigned_sessions: teacher.total_assigned_sessions(),
            courses_with_sessions: teacher.courses_with_at_least_one_session(),
            courses: teacher
                .courses
                .into_iter()
                .map(CourseScheduleResponse::from)
                .collect(),
        }
    }
}

impl From<CourseSchedule> for CourseScheduleResponse {
    fn from(schedule: CourseSchedule) -> Self {
        Self {
            id: schedule.course.id,
            name: schedule.course.name,
            code: schedule.course.code,
            weekly_hours: schedule.course.weekly_hours,
            sessions: schedule.sessions.iter().map(SessionResponse::from).collect(),
        }
    }
}

impl From<CompletionBoard> for BoardResponse {
    fn from(board: CompletionBoard) -> Self {
        let entries =
            |bucket: Vec<TeacherWithCourses>| bucket.into_iter().map(TeacherBoardEntry::from).collect();

        Self {
            no_schedule: entries(board.no_schedule),
            in_progress: entries(board.in_progress),
            complete: entries(board.complete),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use models::completion::bucket_board;
    use models::roster::Course;
    use models::session::{Session, SessionType, TimeSlot};
    use models::weekday::Weekday;

    fn teacher(n: u128, sessions_for_course: usize) -> TeacherWithCourses {
        let course = Course {
            id: Uuid::from_u128(n * 10),
            name: format!("Course {n}"),
            code: format!("C-{n:03}"),
            weekly_hours: 4,
        };
        let sessions = (0..sessions_for_course)
            .map(|i| Session {
                id: Uuid::from_u128(n * 100 + i as u128),
                course_id: course.id,
                teacher_id: Uuid::from_u128(n),
                day: Weekday::Monday,
                slot: TimeSlot::from_strings("08:00", "09:00").unwrap(),
                room: None,
                session_type: SessionType::Theory,
            })
            .collect();

        TeacherWithCourses {
            id: Uuid::from_u128(n),
            name: format!("Teacher {n}"),
            courses: vec![CourseSchedule { course, sessions }],
        }
    }

    #[test]
    fn test_board_response_buckets_and_counts() {
        let board = bucket_board(vec![teacher(1, 0), teacher(2, 2)]);
        let response = BoardResponse::from(board);

        assert_eq!(response.no_schedule.len(), 1);
        assert_eq!(response.complete.len(), 1);
        assert!(response.in_progress.is_empty());

        let complete = &response.complete[0];
        assert_eq!(complete.completion_state, "complete");
        assert_eq!(complete.total_courses, 1);
        assert_eq!(complete.total_assigned_sessions, 2);
        assert_eq!(complete.courses_with_sessions, 1);
        assert_eq!(complete.courses[0].sessions.len(), 2);
    }
}
