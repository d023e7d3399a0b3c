mod doc;
mod dtos;
mod error;
mod roster;
mod routes;
mod store;
mod utils;

use axum::{
    Router,
    routing::{delete, get},
};
use doc::ApiDoc;
use log::info;
use std::{env, path::Path, sync::Arc};
use store::ScheduleStore;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let roster_path = env::var("ROSTER_PATH").unwrap_or_else(|_| "roster.json".to_string());
    let roster = roster::load(Path::new(&roster_path)).expect("Failed to load roster");
    info!(
        "Loaded {} teachers from {roster_path}",
        roster.teachers.len()
    );

    let store = Arc::new(ScheduleStore::from_roster(roster));

    let app = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/courses/{course_id}/sessions",
            get(routes::session::get_course_sessions),
        )
        .route(
            "/teachers/{teacher_id}/sessions",
            get(routes::session::get_teacher_sessions),
        )
        .route(
            "/teachers/{teacher_id}/grid",
            get(routes::grid::get_teacher_grid),
        )
        .route(
            "/sessions",
            get(routes::session::list_sessions).post(routes::session::create_session),
        )
        .route("/sessions/{id}", delete(routes::session::delete_session))
        .route("/grid", get(routes::grid::get_grid))
        .route("/board", get(routes::board::get_board))
        .with_state(store)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
