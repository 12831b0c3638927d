use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

/// Rectangle in longitude/latitude space. Bounds are inclusive and not checked for order:
/// an inverted box simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn contains(&self, at: Coordinate) -> bool {
        self.west <= at.lng && at.lng <= self.east && self.south <= at.lat && at.lat <= self.north
    }

    pub fn is_finite(&self) -> bool {
        [self.north, self.south, self.east, self.west]
            .iter()
            .all(|bound| bound.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    pub site_url: String,
    pub category: String,
    pub icon_category: i32,
}

impl Event {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lng: self.lng,
            lat: self.lat,
        }
    }
}

/// Map-marker shape of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightweightEvent {
    pub id: i32,
    pub lat: f64,
    pub lng: f64,
    pub icon_category: i32,
}

impl From<&Event> for LightweightEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            lat: event.lat,
            lng: event.lng,
            icon_category: event.icon_category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Full,
    Lightweight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventList {
    Full(Vec<Event>),
    Lightweight(Vec<LightweightEvent>),
}

impl EventList {
    pub fn len(&self) -> usize {
        match self {
            EventList::Full(events) => events.len(),
            EventList::Lightweight(markers) => markers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<i32> {
        match self {
            EventList::Full(events) => events.iter().map(|e| e.id).collect(),
            EventList::Lightweight(markers) => markers.iter().map(|m| m.id).collect(),
        }
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;
    use crate::tests::fixtures::events::EventBuilder;
    use rstest::rstest;

    const BOX: BoundingBox = BoundingBox {
        north: 36.0,
        south: 35.0,
        east: 140.0,
        west: 139.0,
    };

    #[rstest]
    #[case(139.5, 35.5, true)]
    #[case(140.0, 36.0, true)]
    #[case(139.0, 35.0, true)]
    #[case(140.000_001, 36.0, false)]
    #[case(139.5, 34.999_999, false)]
    fn it_should_treat_every_bound_as_inclusive(
        #[case] lng: f64,
        #[case] lat: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(BOX.contains(Coordinate { lng, lat }), expected);
    }

    #[rstest]
    fn it_should_match_nothing_when_the_box_is_inverted() {
        let inverted = BoundingBox {
            north: 35.0,
            south: 36.0,
            ..BOX
        };
        assert!(!inverted.contains(Coordinate {
            lng: 139.5,
            lat: 35.5
        }));
    }

    #[rstest]
    fn it_should_reject_non_finite_bounds() {
        let broken = BoundingBox {
            east: f64::NAN,
            ..BOX
        };
        assert!(BOX.is_finite());
        assert!(!broken.is_finite());
    }

    #[rstest]
    fn it_should_serialize_the_full_shape_with_plain_dates() {
        let event = EventBuilder::new().id(7).title("Lantern walk").build();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["start_date"], "2026-10-16");
        assert_eq!(json["icon_category"], 1);
    }

    #[rstest]
    fn it_should_serialize_event_lists_as_bare_arrays() {
        let event = EventBuilder::new().id(3).build();
        let list = EventList::Lightweight(vec![LightweightEvent::from(&event)]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "id": 3, "lat": 35.5, "lng": 139.5, "icon_category": 1 }])
        );
    }
}
