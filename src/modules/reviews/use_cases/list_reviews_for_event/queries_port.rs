use crate::modules::reviews::core::review::Review;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

/// Most reviews returned for a single event.
pub const LATEST_REVIEWS_LIMIT: i64 = 100;

#[async_trait]
pub trait ReviewQueries {
    /// Newest first, at most `limit` rows.
    async fn list_for_event(&self, event_id: i32, limit: i64) -> Result<Vec<Review>, StoreError>;
}
