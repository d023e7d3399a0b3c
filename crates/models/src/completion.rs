use crate::roster::TeacherWithCourses;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::EnumIter;

/// Scheduling progress of a teacher across all of their courses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    /// No sessions scheduled for any course
    NoSchedule,
    /// Some sessions exist but at least one course has none
    InProgress,
    /// Every course has at least one session
    Complete,
}

impl Display for CompletionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NoSchedule => write!(f, "no schedule"),
            Self::InProgress => write!(f, "in progress"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Classifies a teacher's overall scheduling progress
///
/// A course counts as covered with a single session; hour-count sufficiency
/// is not checked here. Pure and recomputed on every read, so it can never
/// go stale across schedule mutations.
pub fn classify(teacher: &TeacherWithCourses) -> CompletionState {
    if teacher.total_assigned_sessions() == 0 {
        CompletionState::NoSchedule
    } else if teacher.courses.iter().all(|c| c.has_sessions()) {
        CompletionState::Complete
    } else {
        CompletionState::InProgress
    }
}

/// The three-column completion board
///
/// Teachers keep the order of the source collection within their column.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct CompletionBoard {
    pub no_schedule: Vec<TeacherWithCourses>,
    pub in_progress: Vec<TeacherWithCourses>,
    pub complete: Vec<TeacherWithCourses>,
}

/// Buckets teachers into the board by completion state
pub fn bucket_board(teachers: Vec<TeacherWithCourses>) -> CompletionBoard {
    let mut board = CompletionBoard::default();

    for teacher in teachers {
        match classify(&teacher) {
            CompletionState::NoSchedule => board.no_schedule.push(teacher),
            CompletionState::InProgress => board.in_progress.push(teacher),
            CompletionState::Complete => board.complete.push(teacher),
        }
    }

    board
}
