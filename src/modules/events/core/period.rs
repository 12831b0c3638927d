// Coarse time-period filter.
//
// A selector resolves, relative to a civil reference date, into a date predicate over an
// event's inclusive [start_date, end_date] range. The predicate knows its positional
// arguments so callers can number the placeholders that follow it.

use chrono::{Datelike, Days, Months, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSelector {
    Today,
    Weekend,
    All,
    /// Anything else the caller sent. Resolves exactly like `Today`.
    Unrecognized(String),
}

impl PeriodSelector {
    /// A missing selector means `Today`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("today") => PeriodSelector::Today,
            Some("weekend") => PeriodSelector::Weekend,
            Some("all") => PeriodSelector::All,
            Some(other) => PeriodSelector::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPredicate {
    ActiveOn(NaiveDate),
    ActiveOnEither(NaiveDate, NaiveDate),
    EndedOnOrAfter(NaiveDate),
}

pub fn resolve(selector: &PeriodSelector, reference: NaiveDate) -> PeriodPredicate {
    match selector {
        PeriodSelector::Today | PeriodSelector::Unrecognized(_) => {
            PeriodPredicate::ActiveOn(reference)
        }
        PeriodSelector::Weekend => {
            let (saturday, sunday) = weekend_of(reference);
            PeriodPredicate::ActiveOnEither(saturday, sunday)
        }
        PeriodSelector::All => PeriodPredicate::EndedOnOrAfter(
            reference
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
        ),
    }
}

/// The Saturday/Sunday pair covering `reference`, or the next one on a weekday.
fn weekend_of(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    match reference.weekday().num_days_from_sunday() {
        0 => (reference - Days::new(1), reference),
        6 => (reference, reference + Days::new(1)),
        weekday => {
            let saturday = reference + Days::new(u64::from(6 - weekday));
            (saturday, saturday + Days::new(1))
        }
    }
}

impl PeriodPredicate {
    pub fn arguments(&self) -> Vec<NaiveDate> {
        match *self {
            PeriodPredicate::ActiveOn(day) | PeriodPredicate::EndedOnOrAfter(day) => vec![day],
            PeriodPredicate::ActiveOnEither(first, second) => vec![first, second],
        }
    }

    /// SQL text for the predicate, with placeholders numbered from `first_placeholder`.
    pub fn sql_clause(&self, first_placeholder: usize) -> String {
        let active_on = |n: usize| format!("(start_date <= ${n}::date AND end_date >= ${n}::date)");
        match self {
            PeriodPredicate::ActiveOn(_) => active_on(first_placeholder),
            PeriodPredicate::ActiveOnEither(..) => format!(
                "({} OR {})",
                active_on(first_placeholder),
                active_on(first_placeholder + 1)
            ),
            PeriodPredicate::EndedOnOrAfter(_) => {
                format!("(end_date >= ${first_placeholder}::date)")
            }
        }
    }

    pub fn matches(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        let active_on = |day: NaiveDate| start_date <= day && day <= end_date;
        match *self {
            PeriodPredicate::ActiveOn(day) => active_on(day),
            PeriodPredicate::ActiveOnEither(first, second) => active_on(first) || active_on(second),
            PeriodPredicate::EndedOnOrAfter(day) => end_date >= day,
        }
    }
}
