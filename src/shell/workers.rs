use crate::modules::events::use_cases::serve_todays_snapshot::handler::{
    SnapshotCache, SnapshotError,
};
use crate::shared::core::primitives::{Clock, next_rollover};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Minutes past civil midnight at which the next day's snapshot is built.
pub const ROLLOVER_MINUTE: u32 = 1;

/// Publishes today's snapshot and evicts the rest.
#[tracing::instrument(skip_all)]
pub async fn ensure_todays_snapshot(
    snapshots: &SnapshotCache,
    clock: &dyn Clock,
) -> Result<(), SnapshotError> {
    let today = clock.today();
    snapshots.ensure(today).await?;
    tracing::info!(%today, "today's snapshot ready");
    Ok(())
}

/// How long to sleep before the next rollover.
pub fn until_next_rollover(clock: &dyn Clock) -> Duration {
    let now = clock.now();
    next_rollover(now, ROLLOVER_MINUTE)
        .and_then(|at| (at - now).to_std().ok())
        .unwrap_or(Duration::from_secs(60))
}

/// Runs forever, rebuilding the snapshot shortly after every civil midnight. A failed run
/// is logged and the next request for today retries it.
pub fn spawn_daily_rollover(snapshots: Arc<SnapshotCache>, clock: Arc<dyn Clock>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let wait = until_next_rollover(clock.as_ref());
            tracing::debug!(seconds = wait.as_secs(), "sleeping until snapshot rollover");
            tokio::time::sleep(wait).await;

            if let Err(error) = ensure_todays_snapshot(&snapshots, clock.as_ref()).await {
                tracing::error!(%error, "daily snapshot rollover failed");
            }
        }
    })
}
