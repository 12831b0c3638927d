// Shared test fixture for events.
// The canonical event lives in json/event.json; setters override single fields.

use crate::modules::events::core::event::Event;
use chrono::NaiveDate;
use std::fs;

const EVENT_JSON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/fixtures/json/event.json");

pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(EVENT_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: i32) -> Self {
        self.inner.id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn dates(mut self, start: &str, end: &str) -> Self {
        self.inner.start_date = date(start);
        self.inner.end_date = date(end);
        self
    }

    pub fn at(mut self, lng: f64, lat: f64) -> Self {
        self.inner.lng = lng;
        self.inner.lat = lat;
        self
    }

    pub fn icon_category(mut self, v: i32) -> Self {
        self.inner.icon_category = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.title, "Autumn festival");
        assert_eq!(built.start_date, date("2026-10-16"));
        assert_eq!((built.lng, built.lat), (139.5, 35.5));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = EventBuilder::new()
            .id(42)
            .title("Moon viewing")
            .dates("2026-10-01", "2026-10-31")
            .at(135.0, 34.0)
            .icon_category(9)
            .build();

        assert_eq!(custom.id, 42);
        assert_eq!(custom.title, "Moon viewing");
        assert_eq!(custom.end_date, date("2026-10-31"));
        assert_eq!((custom.lng, custom.lat), (135.0, 34.0));
        assert_eq!(custom.icon_category, 9);
    }
}
