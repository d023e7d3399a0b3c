use crate::routes::{board, grid, health, root, session};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        session::list_sessions,
        session::get_course_sessions,
        session::get_teacher_sessions,
        session::create_session,
        session::delete_session,
        grid::get_grid,
        grid::get_teacher_grid,
        board::get_board
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Sessions", description = "Session scheduling endpoints"),
        (name = "Grid", description = "Weekly timetable assembly"),
        (name = "Board", description = "Scheduling-progress board"),
    ),
    info(
        title = "Timetable API",
        version = "1.0.0",
        description = "Weekly teaching-session scheduling API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
