use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::event::{BoundingBox, Projection};
use crate::modules::events::core::period::PeriodSelector;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EventsInBoundsParams {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub period: Option<String>,
    pub fields: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<EventsInBoundsParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let bounds = BoundingBox {
        north: params.north,
        south: params.south,
        east: params.east,
        west: params.west,
    };
    if !bounds.is_finite() {
        return error_response(StatusCode::BAD_REQUEST, "bounds must be finite numbers");
    }

    let period = PeriodSelector::parse(params.period.as_deref());
    if let PeriodSelector::Unrecognized(raw) = &period {
        tracing::debug!(period = %raw, "unrecognized period, using today");
    }

    // Any value of `fields`, even an empty one, asks for markers.
    let projection = if params.fields.is_some() {
        Projection::Lightweight
    } else {
        Projection::Full
    };

    match state.executor.query(bounds, &period, projection).await {
        Ok(list) => Json(list).into_response(),
        Err(error) => {
            tracing::error!(%error, "events in bounds query failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
