use chrono::NaiveDate;

use crate::modules::events::core::event::{BoundingBox, Coordinate, Event, LightweightEvent};
use crate::modules::events::core::period::PeriodPredicate;
use crate::modules::events::core::point_codec::{PointDecodeError, decode_point};

/// Filter handed to the store. Rows come back ordered by `start_date, title`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventQuery {
    pub period: PeriodPredicate,
    pub bounds: Option<BoundingBox>,
}

impl EventQuery {
    pub fn matches(&self, start_date: NaiveDate, end_date: NaiveDate, at: Coordinate) -> bool {
        self.period.matches(start_date, end_date)
            && self.bounds.is_none_or(|bounds| bounds.contains(at))
    }
}

/// Full row as returned by the store, location still in WKT form.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub point: String,
    pub location: String,
    pub category: String,
    pub site_url: String,
    pub icon_category: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRow {
    pub id: i32,
    pub point: String,
    pub icon_category: i32,
}

impl TryFrom<EventRow> for Event {
    type Error = PointDecodeError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let at = decode_point(&row.point)?;
        Ok(Event {
            id: row.id,
            title: row.title,
            start_date: row.start_date,
            end_date: row.end_date,
            lat: at.lat,
            lng: at.lng,
            location: row.location,
            site_url: row.site_url,
            category: row.category,
            icon_category: row.icon_category,
        })
    }
}

impl TryFrom<MarkerRow> for LightweightEvent {
    type Error = PointDecodeError;

    fn try_from(row: MarkerRow) -> Result<Self, Self::Error> {
        let at = decode_point(&row.point)?;
        Ok(LightweightEvent {
            id: row.id,
            lat: at.lat,
            lng: at.lng,
            icon_category: row.icon_category,
        })
    }
}
