use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A stored review. Reviews are append-only; nothing edits or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: String,
    pub event_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewReview {
    pub user_id: String,
    pub event_id: i32,
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("user_id is required")]
    MissingUserId,

    #[error("event_id is required")]
    MissingEventId,

    #[error("comment is required")]
    MissingComment,

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i32),
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ReviewValidationError::MissingUserId);
        }
        if self.event_id == 0 {
            return Err(ReviewValidationError::MissingEventId);
        }
        if self.comment.trim().is_empty() {
            return Err(ReviewValidationError::MissingComment);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ReviewValidationError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}
