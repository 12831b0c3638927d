use crate::modules::reviews::core::review::{NewReview, ReviewValidationError};
use crate::modules::reviews::use_cases::submit_review::repository_port::ReviewRepository;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Invalid(#[from] ReviewValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct SubmitReviewHandler {
    repository: Arc<dyn ReviewRepository + Send + Sync>,
}

impl SubmitReviewHandler {
    pub fn new(repository: Arc<dyn ReviewRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Validates before touching the store; an invalid review never reaches it.
    #[tracing::instrument(skip(self, review), fields(event_id = review.event_id))]
    pub async fn handle(&self, review: &NewReview) -> Result<(), ReviewError> {
        review.validate()?;
        self.repository.insert(review).await?;
        tracing::info!("review stored");
        Ok(())
    }
}
