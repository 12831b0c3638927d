use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::reviews::core::review::NewReview;
use crate::modules::reviews::use_cases::submit_review::handler::ReviewError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmitReviewResponse {
    pub status: &'static str,
    pub user_id: String,
    pub event_id: i32,
    pub comment: String,
    pub rating: i32,
    pub created: DateTime<Utc>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewReview>, JsonRejection>,
) -> impl IntoResponse {
    let Json(review) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("invalid request: {}", rejection.body_text()),
            );
        }
    };

    match state.submit_review.handle(&review).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(SubmitReviewResponse {
                status: "ok",
                user_id: review.user_id,
                event_id: review.event_id,
                comment: review.comment,
                rating: review.rating,
                created: state.clock.now(),
            }),
        )
            .into_response(),
        Err(ReviewError::Invalid(reason)) => {
            error_response(StatusCode::BAD_REQUEST, format!("invalid request: {reason}"))
        }
        Err(error @ ReviewError::Store(_)) => {
            tracing::error!(%error, "review insert failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
