use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_map::modules::events::adapters::outbound::event_queries_postgres::PostgresEventQueries;
use event_map::modules::events::use_cases::query_events_in_bounds::handler::GeoQueryExecutor;
use event_map::modules::events::use_cases::serve_todays_snapshot::handler::SnapshotCache;
use event_map::modules::reviews::adapters::outbound::reviews_postgres::PostgresReviews;
use event_map::modules::reviews::use_cases::submit_review::handler::SubmitReviewHandler;
use event_map::shared::core::primitives::{Clock, SystemClock};
use event_map::shared::infrastructure::store::postgres::create_pool;
use event_map::shell::config::Settings;
use event_map::shell::http::app;
use event_map::shell::state::AppState;
use event_map::shell::workers::{ensure_todays_snapshot, spawn_daily_rollover};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration, is DATABASE_URL set?")?;

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let executor = Arc::new(GeoQueryExecutor::new(
        Arc::new(PostgresEventQueries::new(pool.clone())),
        clock.clone(),
    ));
    let snapshots = Arc::new(SnapshotCache::new(
        executor.clone(),
        settings.snapshot_dir.clone(),
        clock.clone(),
    ));
    let reviews = Arc::new(PostgresReviews::new(pool));

    if let Err(error) = ensure_todays_snapshot(&snapshots, clock.as_ref()).await {
        tracing::error!(%error, "startup snapshot failed, requests will retry");
    }
    spawn_daily_rollover(snapshots.clone(), clock.clone());

    let state = AppState {
        executor,
        snapshots,
        review_queries: reviews.clone(),
        submit_review: Arc::new(SubmitReviewHandler::new(reviews)),
        clock,
    };
    let router = app(state, &settings.allowed_origins());

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid BIND_ADDR {}", settings.bind_addr))?;
    tracing::info!("event map API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
