// PostGIS-backed event queries.
//
// The store keeps locations in a geometry column `lnglat`; rows come back with the point
// rendered through `ST_AsText`, and decoding stays with the executor.

use chrono::NaiveDate;
use diesel::OptionalExtension;
use diesel::QueryableByName;
use diesel::pg::Pg;
use diesel::sql_types::{Date, Double, Integer, Text};
use diesel_async::RunQueryDsl;

use crate::modules::events::core::query::{EventQuery, EventRow, MarkerRow};
use crate::modules::events::use_cases::query_events_in_bounds::queries_port::EventQueries;
use crate::shared::infrastructure::store::StoreError;
use crate::shared::infrastructure::store::postgres::{DbPool, checkout};

const FULL_COLUMNS: &str = "id, title, start_date, end_date, ST_AsText(lnglat) AS point, \
     location, category, site_url, icon_category";
const MARKER_COLUMNS: &str = "id, ST_AsText(lnglat) AS point, icon_category";

#[derive(QueryableByName)]
struct EventRecord {
    #[diesel(sql_type = Integer)]
    id: i32,
    #[diesel(sql_type = Text)]
    title: String,
    #[diesel(sql_type = Date)]
    start_date: NaiveDate,
    #[diesel(sql_type = Date)]
    end_date: NaiveDate,
    #[diesel(sql_type = Text)]
    point: String,
    #[diesel(sql_type = Text)]
    location: String,
    #[diesel(sql_type = Text)]
    category: String,
    #[diesel(sql_type = Text)]
    site_url: String,
    #[diesel(sql_type = Integer)]
    icon_category: i32,
}

impl From<EventRecord> for EventRow {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            start_date: record.start_date,
            end_date: record.end_date,
            point: record.point,
            location: record.location,
            category: record.category,
            site_url: record.site_url,
            icon_category: record.icon_category,
        }
    }
}

#[derive(QueryableByName)]
struct MarkerRecord {
    #[diesel(sql_type = Integer)]
    id: i32,
    #[diesel(sql_type = Text)]
    point: String,
    #[diesel(sql_type = Integer)]
    icon_category: i32,
}

impl From<MarkerRecord> for MarkerRow {
    fn from(record: MarkerRecord) -> Self {
        Self {
            id: record.id,
            point: record.point,
            icon_category: record.icon_category,
        }
    }
}

/// A rendered SELECT and its binds, in placeholder order: period dates first, then the
/// box as `west, east, south, north`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub sql: String,
    pub dates: Vec<NaiveDate>,
    pub degrees: Vec<f64>,
}

pub fn build_select(columns: &str, query: &EventQuery) -> SelectStatement {
    let dates = query.period.arguments();
    let mut sql = format!(
        "SELECT {columns} FROM events WHERE {}",
        query.period.sql_clause(1)
    );

    let mut degrees = Vec::new();
    if let Some(bounds) = query.bounds {
        let n = dates.len();
        sql.push_str(&format!(
            " AND ST_X(lnglat) BETWEEN ${} AND ${} AND ST_Y(lnglat) BETWEEN ${} AND ${}",
            n + 1,
            n + 2,
            n + 3,
            n + 4
        ));
        degrees = vec![bounds.west, bounds.east, bounds.south, bounds.north];
    }

    sql.push_str(" ORDER BY start_date, title");
    SelectStatement {
        sql,
        dates,
        degrees,
    }
}

pub struct PostgresEventQueries {
    pool: DbPool,
}

impl PostgresEventQueries {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load<R>(&self, statement: SelectStatement) -> Result<Vec<R>, StoreError>
    where
        R: QueryableByName<Pg> + Send + 'static,
    {
        let mut conn = checkout(&self.pool).await?;

        let mut query = diesel::sql_query(statement.sql).into_boxed::<Pg>();
        for date in statement.dates {
            query = query.bind::<Date, _>(date);
        }
        for degree in statement.degrees {
            query = query.bind::<Double, _>(degree);
        }

        Ok(query.load::<R>(&mut conn).await?)
    }
}

#[async_trait::async_trait]
impl EventQueries for PostgresEventQueries {
    #[tracing::instrument(skip(self))]
    async fn find_events(&self, query: &EventQuery) -> Result<Vec<EventRow>, StoreError> {
        let records: Vec<EventRecord> = self.load(build_select(FULL_COLUMNS, query)).await?;
        Ok(records.into_iter().map(EventRow::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn find_markers(&self, query: &EventQuery) -> Result<Vec<MarkerRow>, StoreError> {
        let records: Vec<MarkerRecord> = self.load(build_select(MARKER_COLUMNS, query)).await?;
        Ok(records.into_iter().map(MarkerRow::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn find_event(&self, id: i32) -> Result<Option<EventRow>, StoreError> {
        let mut conn = checkout(&self.pool).await?;

        let record: Option<EventRecord> =
            diesel::sql_query(format!("SELECT {FULL_COLUMNS} FROM events WHERE id = $1"))
                .bind::<Integer, _>(id)
                .get_result(&mut conn)
                .await
                .optional()?;

        Ok(record.map(EventRow::from))
    }
}
