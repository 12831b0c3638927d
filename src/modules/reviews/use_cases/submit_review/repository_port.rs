use crate::modules::reviews::core::review::NewReview;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository {
    async fn insert(&self, review: &NewReview) -> Result<(), StoreError>;
}
