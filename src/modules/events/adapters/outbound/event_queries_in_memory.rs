// In memory event store.
//
// Purpose
// - Exercise the query executor and the snapshot cache without a database.
//
// Responsibilities
// - Keep event rows next to the coordinate the spatial index would see.
// - Count fetches, and optionally delay or fail them, so callers can observe concurrency.

use crate::modules::events::core::event::{Coordinate, Event};
use crate::modules::events::core::point_codec::encode_point;
use crate::modules::events::core::query::{EventQuery, EventRow, MarkerRow};
use crate::modules::events::use_cases::query_events_in_bounds::queries_port::EventQueries;
use crate::shared::infrastructure::store::StoreError;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredEvent {
    row: EventRow,
    at: Coordinate,
}

#[derive(Default)]
pub struct InMemoryEventQueries {
    rows: RwLock<Vec<StoredEvent>>,
    fetches: AtomicUsize,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryEventQueries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let rows = events.into_iter().map(stored).collect();
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    pub async fn insert(&self, event: Event) {
        self.rows.write().await.push(stored(event));
    }

    /// Stores `event` but renders its location as `point` instead of its coordinate.
    pub async fn insert_with_point_text(&self, event: Event, point: impl Into<String>) {
        let mut entry = stored(event);
        entry.row.point = point.into();
        self.rows.write().await.push(entry);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of list queries served so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    async fn select(&self, query: &EventQuery) -> Result<Vec<EventRow>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(StoreError::Unavailable("Event store offline".into()));
        }

        let guard = self.rows.read().await;
        let mut rows: Vec<EventRow> = guard
            .iter()
            .filter(|stored| query.matches(stored.row.start_date, stored.row.end_date, stored.at))
            .map(|stored| stored.row.clone())
            .collect();
        rows.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(rows)
    }
}

fn stored(event: Event) -> StoredEvent {
    let at = event.coordinate();
    StoredEvent {
        row: EventRow {
            id: event.id,
            title: event.title,
            start_date: event.start_date,
            end_date: event.end_date,
            point: encode_point(at),
            location: event.location,
            category: event.category,
            site_url: event.site_url,
            icon_category: event.icon_category,
        },
        at,
    }
}

#[async_trait::async_trait]
impl EventQueries for InMemoryEventQueries {
    async fn find_events(&self, query: &EventQuery) -> Result<Vec<EventRow>, StoreError> {
        self.select(query).await
    }

    async fn find_markers(&self, query: &EventQuery) -> Result<Vec<MarkerRow>, StoreError> {
        Ok(self
            .select(query)
            .await?
            .into_iter()
            .map(|row| MarkerRow {
                id: row.id,
                point: row.point,
                icon_category: row.icon_category,
            })
            .collect())
    }

    async fn find_event(&self, id: i32) -> Result<Option<EventRow>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Event store offline".into()));
        }

        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|stored| stored.row.id == id)
            .map(|stored| stored.row.clone()))
    }
}
