use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Every calendar computation in the service happens in this zone, whatever the host locale.
pub const CIVIL_ZONE: Tz = chrono_tz::Asia::Tokyo;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        civil_date(self.now())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Used by tests and by tooling that replays a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Noon of `day` in the civil zone.
    pub fn at_civil_noon(day: NaiveDate) -> Option<Self> {
        let noon = day.and_time(NaiveTime::from_hms_opt(12, 0, 0)?);
        let instant = CIVIL_ZONE.from_local_datetime(&noon).single()?;
        Some(Self(instant.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn civil_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&CIVIL_ZONE).date_naive()
}

/// The first civil `00:MM` strictly after `instant`.
pub fn next_rollover(instant: DateTime<Utc>, minute: u32) -> Option<DateTime<Utc>> {
    let time = NaiveTime::from_hms_opt(0, minute, 0)?;
    let at = |day: NaiveDate| {
        CIVIL_ZONE
            .from_local_datetime(&day.and_time(time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    };

    let today = civil_date(instant);
    match at(today)? {
        rollover if rollover > instant => Some(rollover),
        _ => at(today.succ_opt()?),
    }
}
