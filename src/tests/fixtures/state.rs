// App state over in-memory stores, a clock frozen at noon on 2026-10-16 (JST) and a
// throwaway snapshot directory. Keep the returned TempDir alive for the test's duration.

use crate::modules::events::adapters::outbound::event_queries_in_memory::InMemoryEventQueries;
use crate::modules::events::use_cases::query_events_in_bounds::handler::GeoQueryExecutor;
use crate::modules::events::use_cases::serve_todays_snapshot::handler::SnapshotCache;
use crate::modules::reviews::adapters::outbound::reviews_in_memory::InMemoryReviews;
use crate::modules::reviews::use_cases::submit_review::handler::SubmitReviewHandler;
use crate::shared::core::primitives::{Clock, FixedClock};
use crate::shell::state::AppState;
use crate::tests::fixtures::events::date;
use std::sync::Arc;
use tempfile::TempDir;

pub fn make_state(events: Arc<InMemoryEventQueries>, reviews: Arc<InMemoryReviews>) -> (AppState, TempDir) {
    let directory = tempfile::tempdir().unwrap();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::at_civil_noon(date("2026-10-16")).unwrap());
    let executor = Arc::new(GeoQueryExecutor::new(events, clock.clone()));
    let snapshots = Arc::new(SnapshotCache::new(
        executor.clone(),
        directory.path(),
        clock.clone(),
    ));
    let state = AppState {
        executor,
        snapshots,
        review_queries: reviews.clone(),
        submit_review: Arc::new(SubmitReviewHandler::new(reviews)),
        clock,
    };
    (state, directory)
}

pub fn make_test_state(events: InMemoryEventQueries) -> (AppState, TempDir) {
    make_state(Arc::new(events), Arc::new(InMemoryReviews::new()))
}

/// Every store offline. Nothing gets written, so the snapshot directory is not kept.
pub fn make_offline_state() -> AppState {
    let mut events = InMemoryEventQueries::new();
    events.toggle_offline();
    let mut reviews = InMemoryReviews::new();
    reviews.toggle_offline();
    make_state(Arc::new(events), Arc::new(reviews)).0
}
