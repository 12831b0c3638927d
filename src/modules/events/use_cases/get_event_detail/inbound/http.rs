use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(id) => id,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "invalid event id"),
    };

    match state.executor.detail(id).await {
        Ok(Some(event)) => Json(event).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "event not found"),
        Err(error) => {
            tracing::error!(id, %error, "event detail lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
