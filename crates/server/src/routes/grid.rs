use crate::dtos::grid::{GridQueryParams, WeeklyGridResponse};
use crate::dtos::session::SessionFilterParams;
use crate::error::ApiError;
use crate::store::ScheduleStore;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use models::grid::build_grid;
use std::sync::Arc;
use uuid::Uuid;

/// Get the weekly grid for an arbitrary course set
///
/// The assembler is display-scoped: a student context passes its enrolled
/// courses, an admin overview passes none and sees everything.
#[utoipa::path(
    get,
    path = "/grid",
    params(SessionFilterParams, GridQueryParams),
    responses(
        (status = 200, description = "Weekly grid assembled successfully", body = WeeklyGridResponse),
        (status = 404, description = "A filtered course does not exist"),
        (status = 422, description = "Malformed hour window")
    ),
    tag = "Grid"
)]
pub async fn get_grid(
    State(store): State<Arc<ScheduleStore>>,
    Query(filter): Query<SessionFilterParams>,
    Query(params): Query<GridQueryParams>,
) -> Result<Json<WeeklyGridResponse>, ApiError> {
    let config = params.to_config()?;
    let sessions = match &filter.course_id {
        Some(course_ids) => store.sessions_for_courses(course_ids)?,
        None => store.all_sessions(),
    };
    let grid = build_grid(&sessions, &config);

    Ok(Json(WeeklyGridResponse::from(grid)))
}

/// Get a teacher's weekly timetable as a positioned grid
///
/// Assembled fresh from the current session snapshot on every call. The
/// visible hour window defaults to 07:00-21:00 and can be overridden per
/// request.
#[utoipa::path(
    get,
    path = "/teachers/{teacher_id}/grid",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID"),
        GridQueryParams
    ),
    responses(
        (status = 200, description = "Weekly grid assembled successfully", body = WeeklyGridResponse),
        (status = 404, description = "Teacher not found"),
        (status = 422, description = "Malformed hour window")
    ),
    tag = "Grid"
)]
pub async fn get_teacher_grid(
    State(store): State<Arc<ScheduleStore>>,
    Path(teacher_id): Path<Uuid>,
    Query(params): Query<GridQueryParams>,
) -> Result<Json<WeeklyGridResponse>, ApiError> {
    let config = params.to_config()?;
    let sessions = store.sessions_for_teacher(teacher_id)?;
    let grid = build_grid(&sessions, &config);

    Ok(Json(WeeklyGridResponse::from(grid)))
}
