use crate::modules::events::adapters::outbound::event_queries_in_memory::InMemoryEventQueries;
use crate::shell::http::app;
use crate::tests::fixtures::events::EventBuilder;
use crate::tests::fixtures::state::make_test_state;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn returns_todays_event_in_bounds_and_excludes_next_weeks_twin() {
    let (state, _dir) = make_test_state(InMemoryEventQueries::with_events([
        EventBuilder::new()
            .id(1)
            .title("Lantern walk")
            .at(139.5, 35.5)
            .build(),
        EventBuilder::new()
            .id(2)
            .title("Lantern walk")
            .at(139.5, 35.5)
            .dates("2026-10-23", "2026-10-23")
            .build(),
    ]));
    let router = app(state, &[]);

    let response = router
        .clone()
        .oneshot(
            Request::get("/events/bounds?north=36&south=35&east=140&west=139&period=today")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let events: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let ids: Vec<i64> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1]);

    let response = router
        .oneshot(Request::get("/events/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let detail: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(detail["start_date"], "2026-10-23");
}
