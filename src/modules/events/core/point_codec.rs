// Well-known-text point codec.
//
// The store renders locations as `POINT(<lng> <lat>)`. Decoding is strict: a malformed
// shape or an unparsable coordinate is an error, never a zeroed coordinate.

use thiserror::Error;

use crate::modules::events::core::event::Coordinate;

const KEYWORD: &str = "POINT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointDecodeError {
    #[error("expected `POINT(` in {0:?}")]
    MissingPrefix(String),

    #[error("missing closing parenthesis in {0:?}")]
    MissingClosingParen(String),

    #[error("expected 2 coordinates, found {found}")]
    WrongArity { found: usize },

    #[error("invalid longitude {0:?}")]
    InvalidLongitude(String),

    #[error("invalid latitude {0:?}")]
    InvalidLatitude(String),
}

pub fn decode_point(text: &str) -> Result<Coordinate, PointDecodeError> {
    let trimmed = text.trim();
    let inner = trimmed
        .get(..KEYWORD.len())
        .filter(|keyword| keyword.eq_ignore_ascii_case(KEYWORD))
        .and_then(|_| trimmed[KEYWORD.len()..].trim_start().strip_prefix('('))
        .ok_or_else(|| PointDecodeError::MissingPrefix(text.to_string()))?
        .strip_suffix(')')
        .ok_or_else(|| PointDecodeError::MissingClosingParen(text.to_string()))?;

    let tokens: Vec<&str> = inner.split_whitespace().collect();
    let [lng, lat] = tokens.as_slice() else {
        return Err(PointDecodeError::WrongArity {
            found: tokens.len(),
        });
    };

    Ok(Coordinate {
        lng: parse_degrees(lng).ok_or_else(|| PointDecodeError::InvalidLongitude(lng.to_string()))?,
        lat: parse_degrees(lat).ok_or_else(|| PointDecodeError::InvalidLatitude(lat.to_string()))?,
    })
}

pub fn encode_point(at: Coordinate) -> String {
    format!("{KEYWORD}({} {})", at.lng, at.lat)
}

fn parse_degrees(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
