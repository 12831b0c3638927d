use crate::modules::events::core::query::{EventQuery, EventRow, MarkerRow};
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait EventQueries {
    async fn find_events(&self, query: &EventQuery) -> Result<Vec<EventRow>, StoreError>;

    async fn find_markers(&self, query: &EventQuery) -> Result<Vec<MarkerRow>, StoreError>;

    async fn find_event(&self, id: i32) -> Result<Option<EventRow>, StoreError>;
}
