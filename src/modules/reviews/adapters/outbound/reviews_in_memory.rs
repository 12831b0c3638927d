use crate::modules::reviews::core::review::{NewReview, Review};
use crate::modules::reviews::use_cases::list_reviews_for_event::queries_port::ReviewQueries;
use crate::modules::reviews::use_cases::submit_review::repository_port::ReviewRepository;
use crate::shared::infrastructure::store::StoreError;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryReviews {
    rows: RwLock<Vec<Review>>,
    next_id: AtomicI64,
    is_offline: bool,
}

impl Default for InMemoryReviews {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReviews {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Review store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReviewRepository for InMemoryReviews {
    async fn insert(&self, review: &NewReview) -> Result<(), StoreError> {
        self.ensure_online()?;
        let row = Review {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: review.user_id.clone(),
            event_id: review.event_id,
            rating: review.rating,
            comment: review.comment.clone(),
            created_at: Utc::now(),
        };
        self.rows.write().await.push(row);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReviewQueries for InMemoryReviews {
    async fn list_for_event(&self, event_id: i32, limit: i64) -> Result<Vec<Review>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Review> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }
}
