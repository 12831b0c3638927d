use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.snapshots.todays_events().await {
        Ok(events) => Json(events).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to prepare today's snapshot");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to prepare today json")
        }
    }
}

#[cfg(test)]
mod serve_todays_snapshot_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::events::adapters::outbound::event_queries_in_memory::InMemoryEventQueries;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::events::EventBuilder;
    use crate::tests::fixtures::state::{make_offline_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/today", get(handle))
            .with_state(state)
    }

    async fn get_today(state: AppState) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get("/events/today").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_todays_events_and_publish_the_snapshot() {
        let (state, directory) = make_test_state(InMemoryEventQueries::with_events([
            EventBuilder::new().id(1).build(),
            EventBuilder::new()
                .id(2)
                .dates("2026-10-17", "2026-10-17")
                .build(),
        ]));

        let (status, json) = get_today(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], 1);
        assert!(directory.path().join("events-20261016.json").exists());
    }

    #[tokio::test]
    async fn it_should_return_500_with_a_fixed_message_when_generation_fails() {
        let (status, json) = get_today(make_offline_state()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            serde_json::json!({ "error": "failed to prepare today json" })
        );
    }
}
