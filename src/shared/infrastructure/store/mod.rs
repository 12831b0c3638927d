// Shared plumbing for the relational/spatial store.
//
// Purpose
// - Give every port the same error vocabulary, whatever the backing adapter.
//
// Boundaries
// - Ports live in their use case; adapters map their native failures into StoreError.

pub mod postgres;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        StoreError::Query(error.to_string())
    }
}
