use crate::modules::events::adapters::outbound::event_queries_in_memory::InMemoryEventQueries;
use crate::modules::reviews::adapters::outbound::reviews_in_memory::InMemoryReviews;
use crate::shell::http::app;
use crate::tests::fixtures::events::EventBuilder;
use crate::tests::fixtures::state::make_state;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_today(router: Router) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::get("/events/today").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn serves_today_from_a_single_generation_and_evicts_older_days() {
    let events = Arc::new(InMemoryEventQueries::with_events([
        EventBuilder::new().id(1).title("Lantern walk").build(),
        EventBuilder::new()
            .id(2)
            .title("Osaka parade")
            .at(135.5, 34.7)
            .build(),
    ]));
    let (state, dir) = make_state(events.clone(), Arc::new(InMemoryReviews::new()));
    tokio::fs::write(dir.path().join("events-20261015.json"), b"[]")
        .await
        .unwrap();
    tokio::fs::write(dir.path().join("notes.txt"), b"keep")
        .await
        .unwrap();
    let router = app(state, &[]);

    let (first, second) = tokio::join!(get_today(router.clone()), get_today(router.clone()));
    let (third_status, third) = get_today(router).await;

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);
    assert_eq!(third_status, StatusCode::OK);
    assert_eq!(first.1, third);
    assert_eq!(third.as_array().unwrap().len(), 2);
    assert_eq!(events.fetch_count(), 1);

    assert!(dir.path().join("events-20261016.json").exists());
    assert!(!dir.path().join("events-20261015.json").exists());
    assert!(dir.path().join("notes.txt").exists());
}
