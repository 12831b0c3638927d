use crate::modules::events::use_cases::query_events_in_bounds::handler::GeoQueryExecutor;
use crate::modules::events::use_cases::serve_todays_snapshot::handler::SnapshotCache;
use crate::modules::reviews::use_cases::list_reviews_for_event::queries_port::ReviewQueries;
use crate::modules::reviews::use_cases::submit_review::handler::SubmitReviewHandler;
use crate::shared::core::primitives::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<GeoQueryExecutor>,
    pub snapshots: Arc<SnapshotCache>,
    pub review_queries: Arc<dyn ReviewQueries + Send + Sync>,
    pub submit_review: Arc<SubmitReviewHandler>,
    pub clock: Arc<dyn Clock>,
}
