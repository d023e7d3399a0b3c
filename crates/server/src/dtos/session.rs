use crate::error::ApiError;
use crate::store::NewSession;
use models::conflict::{Conflict, ConflictReason};
use models::session::{DraftError, Session, SessionDraft, SessionType, TIME_FORMAT, TimeSlot};
use models::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Course filter for display-scoped session listings
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct SessionFilterParams {
    /// Courses to include; repeat the parameter per course. Absent means
    /// every course on the platform
    pub course_id: Option<Vec<Uuid>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    pub course_id: Uuid,
    /// ISO day number, Monday = 1 through Sunday = 7
    pub day_of_week: u8,
    /// Start of the session, "HH:MM"
    pub start_time: String,
    /// End of the session, "HH:MM", strictly after the start
    pub end_time: String,
    /// Optional room label; blank means no room assigned
    pub room: Option<String>,
    /// "theory" or "practice"
    pub session_type: String,
}

impl CreateSessionRequest {
    /// The validation gate: malformed drafts stop here, before any conflict
    /// check or store access
    pub fn validate(self) -> Result<NewSession, ApiError> {
        let day = Weekday::try_from(self.day_of_week).map_err(|e| ApiError::Validation {
            field: "day_of_week",
            message: e.to_string(),
        })?;

        let slot =
            TimeSlot::from_strings(&self.start_time, &self.end_time).map_err(|e| match &e {
                DraftError::BadTimeFormat(s) => ApiError::Validation {
                    field: if *s == self.start_time {
                        "start_time"
                    } else {
                        "end_time"
                    },
                    message: e.to_string(),
                },
                DraftError::EmptyTimeSlot => ApiError::Validation {
                    field: "end_time",
                    message: e.to_string(),
                },
            })?;

        let session_type =
            SessionType::from_str(&self.session_type).map_err(|_| ApiError::Validation {
                field: "session_type",
                message: format!(
                    "expected \"theory\" or \"practice\", got {:?}",
                    self.session_type
                ),
            })?;

        Ok(NewSession {
            course_id: self.course_id,
            day,
            slot,
            room: SessionDraft::normalize_room(self.room),
            session_type,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    /// ISO day number, Monday = 1
    pub day_of_week: u8,
    /// Day name, e.g. "Monday"
    pub day: String,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub room: Option<String>,
    pub session_type: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            course_id: session.course_id,
            teacher_id: session.teacher_id,
            day_of_week: session.day.number(),
            day: session.day.to_string(),
            start_time: session.slot.start.format(TIME_FORMAT).to_string(),
            end_time: session.slot.end.format(TIME_FORMAT).to_string(),
            room: session.room.clone(),
            session_type: session.session_type.to_string(),
        }
    }
}

/// Body of a 409 response
///
/// `reason` is the machine discriminator; `message` is display-ready for the
/// conflict banner and never needs parsing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConflictResponse {
    /// "same_teacher" or "same_room"
    pub reason: String,
    pub conflicting_session: SessionResponse,
    pub message: String,
}

impl ConflictResponse {
    pub fn new(conflict: &Conflict, message: String) -> Self {
        let reason = match conflict.reason {
            ConflictReason::SameTeacher => "same_teacher",
            ConflictReason::SameRoom => "same_room",
        };

        Self {
            reason: reason.to_string(),
            conflicting_session: SessionResponse::from(&conflict.with),
            message,
        }
    }
}
