use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::reviews::use_cases::list_reviews_for_event::queries_port::LATEST_REVIEWS_LIMIT;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<i32>, PathRejection>,
) -> impl IntoResponse {
    let Path(event_id) = match event_id {
        Ok(id) => id,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "invalid event_id"),
    };

    match state
        .review_queries
        .list_for_event(event_id, LATEST_REVIEWS_LIMIT)
        .await
    {
        Ok(reviews) => Json(reviews).into_response(),
        Err(error) => {
            tracing::error!(event_id, %error, "review listing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
