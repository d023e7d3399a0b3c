use crate::dtos::session::{
    ConflictResponse, CreateSessionRequest, SessionFilterParams, SessionResponse,
};
use crate::error::ApiError;
use crate::store::ScheduleStore;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

/// Get sessions across courses as a flat collection
///
/// Display-scoped, not ownership-scoped: pass the course set of whatever
/// context is rendering (a student's enrollment, an admin overview).
#[utoipa::path(
    get,
    path = "/sessions",
    params(SessionFilterParams),
    responses(
        (status = 200, description = "Sessions retrieved successfully", body = [SessionResponse]),
        (status = 404, description = "A filtered course does not exist")
    ),
    tag = "Sessions"
)]
pub async fn list_sessions(
    State(store): State<Arc<ScheduleStore>>,
    Query(filter): Query<SessionFilterParams>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let sessions = match &filter.course_id {
        Some(course_ids) => store.sessions_for_courses(course_ids)?,
        None => store.all_sessions(),
    };

    Ok(Json(sessions.iter().map(SessionResponse::from).collect()))
}

/// Get a course's sessions, ordered by day and start time
#[utoipa::path(
    get,
    path = "/courses/{course_id}/sessions",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Sessions retrieved successfully", body = [SessionResponse]),
        (status = 404, description = "Course not found")
    ),
    tag = "Sessions"
)]
pub async fn get_course_sessions(
    State(store): State<Arc<ScheduleStore>>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let sessions = store.sessions_for_course(course_id)?;

    Ok(Json(sessions.iter().map(SessionResponse::from).collect()))
}

/// Get every session across a teacher's courses as a flat collection
#[utoipa::path(
    get,
    path = "/teachers/{teacher_id}/sessions",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Sessions retrieved successfully", body = [SessionResponse]),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Sessions"
)]
pub async fn get_teacher_sessions(
    State(store): State<Arc<ScheduleStore>>,
    Path(teacher_id): Path<Uuid>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let sessions = store.sessions_for_teacher(teacher_id)?;

    Ok(Json(sessions.iter().map(SessionResponse::from).collect()))
}

/// Schedule a new session
///
/// The draft is field-validated first, then checked against the persisted
/// schedule; a collision on the course's teacher or on the requested room
/// rejects the create with the conflicting session described.
#[utoipa::path(
    post,
    path = "/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Session conflicts with an existing one", body = ConflictResponse),
        (status = 422, description = "Malformed day, time range or session type")
    ),
    tag = "Sessions"
)]
pub async fn create_session(
    State(store): State<Arc<ScheduleStore>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let new_session = request.validate()?;
    let created = store.create_session(new_session)?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(&created))))
}

/// Remove a session from the schedule
///
/// There is no update: editing a session is a delete followed by a create.
#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
pub async fn delete_session(
    State(store): State<Arc<ScheduleStore>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    store.delete_session(id)?;

    Ok(StatusCode::NO_CONTENT)
}
