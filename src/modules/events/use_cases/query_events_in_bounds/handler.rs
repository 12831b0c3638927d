use crate::modules::events::core::event::{BoundingBox, Event, EventList, LightweightEvent, Projection};
use crate::modules::events::core::period::{PeriodSelector, resolve};
use crate::modules::events::core::point_codec::PointDecodeError;
use crate::modules::events::core::query::EventQuery;
use crate::modules::events::use_cases::query_events_in_bounds::queries_port::EventQueries;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::store::StoreError;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryEventsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("event {id} has a malformed location: {source}")]
    Decode {
        id: i32,
        #[source]
        source: PointDecodeError,
    },
}

/// Geo/time filtered reads over the event store.
///
/// Every row's location is decoded on the way out; one undecodable row fails the whole
/// result instead of yielding a partial list.
pub struct GeoQueryExecutor {
    queries: Arc<dyn EventQueries + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl GeoQueryExecutor {
    pub fn new(queries: Arc<dyn EventQueries + Send + Sync>, clock: Arc<dyn Clock>) -> Self {
        Self { queries, clock }
    }

    /// Events inside `bounds` for `period`, relative to today's civil date.
    pub async fn query(
        &self,
        bounds: BoundingBox,
        period: &PeriodSelector,
        projection: Projection,
    ) -> Result<EventList, QueryEventsError> {
        self.query_on(self.clock.today(), Some(bounds), period, projection)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn query_on(
        &self,
        reference: NaiveDate,
        bounds: Option<BoundingBox>,
        period: &PeriodSelector,
        projection: Projection,
    ) -> Result<EventList, QueryEventsError> {
        let query = EventQuery {
            period: resolve(period, reference),
            bounds,
        };

        let list = match projection {
            Projection::Full => EventList::Full(self.full(&query).await?),
            Projection::Lightweight => EventList::Lightweight(self.markers(&query).await?),
        };

        tracing::debug!(count = list.len(), "events queried");
        Ok(list)
    }

    /// Every event active on `day`, anywhere, in full. Feeds the daily snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn events_active_on(&self, day: NaiveDate) -> Result<Vec<Event>, QueryEventsError> {
        let query = EventQuery {
            period: resolve(&PeriodSelector::Today, day),
            bounds: None,
        };
        self.full(&query).await
    }

    async fn full(&self, query: &EventQuery) -> Result<Vec<Event>, QueryEventsError> {
        self.queries
            .find_events(query)
            .await?
            .into_iter()
            .map(|row| {
                let id = row.id;
                Event::try_from(row).map_err(|source| QueryEventsError::Decode { id, source })
            })
            .collect()
    }

    async fn markers(&self, query: &EventQuery) -> Result<Vec<LightweightEvent>, QueryEventsError> {
        self.queries
            .find_markers(query)
            .await?
            .into_iter()
            .map(|row| {
                let id = row.id;
                LightweightEvent::try_from(row)
                    .map_err(|source| QueryEventsError::Decode { id, source })
            })
            .collect()
    }

    /// `Ok(None)` when no event has this id.
    #[tracing::instrument(skip(self))]
    pub async fn detail(&self, id: i32) -> Result<Option<Event>, QueryEventsError> {
        self.queries
            .find_event(id)
            .await?
            .map(|row| Event::try_from(row).map_err(|source| QueryEventsError::Decode { id, source }))
            .transpose()
    }
}
