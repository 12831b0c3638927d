use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::get_event_detail::inbound::http as detail_http;
use crate::modules::events::use_cases::query_events_in_bounds::inbound::http as bounds_http;
use crate::modules::events::use_cases::serve_todays_snapshot::inbound::http as today_http;
use crate::modules::reviews::use_cases::list_reviews_for_event::inbound::http as list_reviews_http;
use crate::modules::reviews::use_cases::submit_review::inbound::http as submit_review_http;
use crate::shell::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events/today", get(today_http::handle))
        .route("/events/bounds", get(bounds_http::handle))
        .route("/events/{id}", get(detail_http::handle))
        .route("/reviews", post(submit_review_http::handle))
        .route("/reviews/{event_id}", get(list_reviews_http::handle))
        .with_state(state)
}

/// With no origins configured any origin is accepted, without credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(CORS_MAX_AGE);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(allowed))
            .allow_credentials(true)
    }
}

pub fn app(state: AppState, origins: &[String]) -> Router {
    router(state)
        .layer(cors_layer(origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod http_shell_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::modules::events::adapters::outbound::event_queries_in_memory::InMemoryEventQueries;
    use crate::tests::fixtures::state::make_test_state;

    fn preflight(origin: &str) -> Request<Body> {
        Request::options("/events/today")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_allow_any_origin_when_none_are_configured() {
        let (state, _dir) = make_test_state(InMemoryEventQueries::new());
        let response = app(state, &[])
            .oneshot(preflight("https://anywhere.example"))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
    }

    #[tokio::test]
    async fn it_should_echo_a_configured_origin_with_credentials() {
        let (state, _dir) = make_test_state(InMemoryEventQueries::new());
        let origins = vec!["https://map.example.com".to_string()];
        let response = app(state, &origins)
            .oneshot(preflight("https://map.example.com"))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://map.example.com"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");
    }

    #[tokio::test]
    async fn it_should_not_allow_an_unlisted_origin() {
        let (state, _dir) = make_test_state(InMemoryEventQueries::new());
        let origins = vec!["https://map.example.com".to_string()];
        let response = app(state, &origins)
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();

        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn it_should_answer_unknown_paths_with_404() {
        let (state, _dir) = make_test_state(InMemoryEventQueries::new());
        let response = app(state, &[])
            .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
