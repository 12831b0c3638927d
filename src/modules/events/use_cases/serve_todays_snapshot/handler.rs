// Daily snapshot of today's events.
//
// Purpose
// - Serve the common "today" view from a file written once per civil day.
//
// Responsibilities
// - Generate the day's file at most once, even under concurrent requests.
// - Publish atomically: write a temporary file, then rename it into place.
// - Evict every snapshot keyed on a day before the current one.
//
// Boundaries
// - Readers of a published file never take a lock.
// - A failed generation leaves nothing behind; the next caller simply tries again.

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::query_events_in_bounds::handler::{
    GeoQueryExecutor, QueryEventsError,
};
use crate::modules::events::use_cases::serve_todays_snapshot::snapshot_files::{
    parse_name, published_name, temporary_name,
};
use crate::shared::core::primitives::Clock;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to fetch events for {day}: {source}")]
    Fetch {
        day: NaiveDate,
        #[source]
        source: QueryEventsError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

pub struct SnapshotCache {
    executor: Arc<GeoQueryExecutor>,
    directory: PathBuf,
    clock: Arc<dyn Clock>,
    generation_locks: Mutex<HashMap<NaiveDate, Arc<Mutex<()>>>>,
}

impl SnapshotCache {
    pub fn new(
        executor: Arc<GeoQueryExecutor>,
        directory: impl Into<PathBuf>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            executor,
            directory: directory.into(),
            clock,
            generation_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn artifact_path(&self, day: NaiveDate) -> PathBuf {
        self.directory.join(published_name(day))
    }

    pub async fn exists(&self, day: NaiveDate) -> Result<bool, SnapshotError> {
        Ok(fs::try_exists(self.artifact_path(day)).await?)
    }

    /// Makes sure the snapshot for `day` is published, then evicts earlier days'.
    #[tracing::instrument(skip(self))]
    pub async fn ensure(&self, day: NaiveDate) -> Result<(), SnapshotError> {
        if !self.exists(day).await? {
            self.generate(day).await?;
        }
        self.cleanup(day).await
    }

    async fn generate(&self, day: NaiveDate) -> Result<(), SnapshotError> {
        let lock = self.generation_lock(day).await;
        let _guard = lock.lock().await;

        if self.exists(day).await? {
            tracing::debug!(%day, "snapshot published by a concurrent caller");
            return Ok(());
        }

        let events = self
            .executor
            .events_active_on(day)
            .await
            .map_err(|source| SnapshotError::Fetch { day, source })?;
        let body = serde_json::to_vec_pretty(&events)?;
        self.publish(day, &body).await?;

        tracing::info!(%day, count = events.len(), "snapshot generated");
        Ok(())
    }

    async fn generation_lock(&self, day: NaiveDate) -> Arc<Mutex<()>> {
        self.generation_locks
            .lock()
            .await
            .entry(day)
            .or_default()
            .clone()
    }

    async fn publish(&self, day: NaiveDate, body: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.directory).await?;
        let temporary = self.directory.join(temporary_name(day));

        let written = async {
            let mut file = fs::File::create(&temporary).await?;
            file.write_all(body).await?;
            file.sync_all().await?;
            fs::rename(&temporary, self.artifact_path(day)).await
        }
        .await;

        if written.is_err() {
            if let Err(error) = fs::remove_file(&temporary).await {
                tracing::debug!(path = %temporary.display(), %error, "temporary snapshot not removed");
            }
        }
        written
    }

    /// Deletes every snapshot file, published or in flight, keyed on a day before `day`.
    /// Later days are left alone: a rollover may be generating one right now.
    #[tracing::instrument(skip(self))]
    pub async fn cleanup(&self, day: NaiveDate) -> Result<(), SnapshotError> {
        let mut entries = match fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(()),
            Err(error) => return Err(error.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some((key, kind)) = name.to_str().and_then(parse_name) else {
                continue;
            };
            if key >= day {
                continue;
            }
            match fs::remove_file(entry.path()).await {
                Ok(()) => tracing::info!(file = ?name, ?kind, "stale snapshot removed"),
                Err(error) => tracing::warn!(file = ?name, %error, "failed to remove stale snapshot"),
            }
        }

        // Idle locks for past days can go; a fresh one is created on demand.
        self.generation_locks
            .lock()
            .await
            .retain(|key, lock| *key >= day || Arc::strong_count(lock) > 1);
        Ok(())
    }

    pub async fn read(&self, day: NaiveDate) -> Result<Vec<Event>, SnapshotError> {
        let bytes = fs::read(self.artifact_path(day)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Today's events, generating the snapshot first when needed.
    pub async fn todays_events(&self) -> Result<Vec<Event>, SnapshotError> {
        let today = self.clock.today();
        self.ensure(today).await?;
        self.read(today).await
    }
}
