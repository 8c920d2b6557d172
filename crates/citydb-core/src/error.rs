// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Errors raised by the I/O layer (CSV ingestion, artifact read/write).
///
/// Normalization never fails; everything fallible lives here or in
/// [`ValidationError`].
#[derive(Debug, Error)]
pub enum CityDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CityDbError>;

/// Structural defects that stop validation of a single artifact.
///
/// These are kept apart from ordering violations, which are collected in a
/// [`crate::validate::ValidationReport`] instead of being raised.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to load dataset: {0}")]
    Load(#[from] CityDbError),

    #[error("empty cities array")]
    Empty,

    #[error("{} record(s) missing 'name' field at indices {:?}", .indices.len(), .indices)]
    MissingName { indices: Vec<usize> },
}
