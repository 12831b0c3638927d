// Naming scheme for snapshot artifacts.
//
// Published: `events-YYYYMMDD.json`
// In flight: `events-YYYYMMDD.json.<uuid>.tmp`, renamed onto the published name once written.

use chrono::NaiveDate;
use uuid::Uuid;

const PREFIX: &str = "events-";
const PUBLISHED_SUFFIX: &str = ".json";
const TEMPORARY_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Published,
    Temporary,
}

pub fn published_name(day: NaiveDate) -> String {
    format!("{PREFIX}{}{PUBLISHED_SUFFIX}", day.format("%Y%m%d"))
}

pub fn temporary_name(day: NaiveDate) -> String {
    format!("{}.{}{TEMPORARY_SUFFIX}", published_name(day), Uuid::now_v7())
}

/// Date key and kind of a snapshot file, or `None` for anything else in the directory.
pub fn parse_name(name: &str) -> Option<(NaiveDate, ArtifactKind)> {
    let rest = name.strip_prefix(PREFIX)?;
    let (key, tail) = rest.split_at_checked(8)?;
    let day = parse_key(key)?;

    let tail = tail.strip_prefix(PUBLISHED_SUFFIX)?;
    if tail.is_empty() {
        return Some((day, ArtifactKind::Published));
    }
    let nonce = tail.strip_prefix('.')?.strip_suffix(TEMPORARY_SUFFIX)?;
    (!nonce.is_empty()).then_some((day, ArtifactKind::Temporary))
}

fn parse_key(key: &str) -> Option<NaiveDate> {
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(
        key[..4].parse().ok()?,
        key[4..6].parse().ok()?,
        key[6..].parse().ok()?,
    )
}
