use crate::dtos::session::ConflictResponse;
use crate::store::StoreError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error surface of the API handlers
///
/// Validation failures never reach the store; conflicts come back from the
/// store's authoritative check and carry the structured payload the UI
/// routes to its inline conflict banner. Everything else is a lookup miss.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request field, rejected before any schedule lookup
    Validation {
        field: &'static str,
        message: String,
    },
    /// The authoritative check rejected the session
    Conflict(Box<ConflictResponse>),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "validation",
                    "field": field,
                    "message": message,
                })),
            )
                .into_response(),
            Self::Conflict(conflict) => {
                (StatusCode::CONFLICT, Json(*conflict)).into_response()
            }
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": message,
                })),
            )
                .into_response(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownCourse(id) => Self::NotFound(format!("no course with id {id}")),
            StoreError::UnknownTeacher(id) => Self::NotFound(format!("no teacher with id {id}")),
            StoreError::UnknownSession(id) => Self::NotFound(format!("no session with id {id}")),
            StoreError::Conflict { conflict, message } => {
                Self::Conflict(Box::new(ConflictResponse::new(&conflict, message)))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::Validation {
            field: "start_time",
            message: "expected a HH:MM time".to_string(),
        };
        assert_eq!(
            validation.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let not_found = ApiError::from(StoreError::UnknownSession(Uuid::from_u128(7)));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);
    }
}
