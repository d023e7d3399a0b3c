use crate::dtos::board::BoardResponse;
use crate::store::ScheduleStore;
use axum::{Json, extract::State};
use models::completion::bucket_board;
use std::sync::Arc;

/// Get the three-column scheduling-progress board
///
/// Teachers are classified from the current snapshot on every call and keep
/// their roster order within each column.
#[utoipa::path(
    get,
    path = "/board",
    responses(
        (status = 200, description = "Completion board retrieved successfully", body = BoardResponse)
    ),
    tag = "Board"
)]
pub async fn get_board(State(store): State<Arc<ScheduleStore>>) -> Json<BoardResponse> {
    let board = bucket_board(store.teachers_with_courses());

    Json(BoardResponse::from(board))
}
