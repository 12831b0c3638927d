// Reviews table access.
//
// `id` and `created_at` are assigned by the database on insert.

use chrono::{DateTime, Utc};
use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Integer, Text, Timestamptz};
use diesel_async::RunQueryDsl;

use crate::modules::reviews::core::review::{NewReview, Review};
use crate::modules::reviews::use_cases::list_reviews_for_event::queries_port::ReviewQueries;
use crate::modules::reviews::use_cases::submit_review::repository_port::ReviewRepository;
use crate::shared::infrastructure::store::StoreError;
use crate::shared::infrastructure::store::postgres::{DbPool, checkout};

const SELECT_LATEST: &str = "SELECT id, user_id, event_id, rating, comment, created_at \
     FROM reviews WHERE event_id = $1 ORDER BY created_at DESC LIMIT $2";

const INSERT: &str = "INSERT INTO reviews (event_id, user_id, comment, rating) \
     VALUES ($1, $2, $3, $4)";

#[derive(QueryableByName)]
struct ReviewRecord {
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Text)]
    user_id: String,
    #[diesel(sql_type = Integer)]
    event_id: i32,
    #[diesel(sql_type = Integer)]
    rating: i32,
    #[diesel(sql_type = Text)]
    comment: String,
    #[diesel(sql_type = Timestamptz)]
    created_at: DateTime<Utc>,
}

impl From<ReviewRecord> for Review {
    fn from(record: ReviewRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            event_id: record.event_id,
            rating: record.rating,
            comment: record.comment,
            created_at: record.created_at,
        }
    }
}

pub struct PostgresReviews {
    pool: DbPool,
}

impl PostgresReviews {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ReviewQueries for PostgresReviews {
    #[tracing::instrument(skip(self))]
    async fn list_for_event(&self, event_id: i32, limit: i64) -> Result<Vec<Review>, StoreError> {
        let mut conn = checkout(&self.pool).await?;

        let records: Vec<ReviewRecord> = diesel::sql_query(SELECT_LATEST)
            .bind::<Integer, _>(event_id)
            .bind::<BigInt, _>(limit)
            .load(&mut conn)
            .await?;

        Ok(records.into_iter().map(Review::from).collect())
    }
}

#[async_trait::async_trait]
impl ReviewRepository for PostgresReviews {
    #[tracing::instrument(skip(self, review), fields(event_id = review.event_id))]
    async fn insert(&self, review: &NewReview) -> Result<(), StoreError> {
        let mut conn = checkout(&self.pool).await?;

        diesel::sql_query(INSERT)
            .bind::<Integer, _>(review.event_id)
            .bind::<Text, _>(review.user_id.clone())
            .bind::<Text, _>(review.comment.clone())
            .bind::<Integer, _>(review.rating)
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}
