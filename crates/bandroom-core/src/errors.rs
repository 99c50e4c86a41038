use thiserror::Error;

use crate::domain::studio::StudioError;

/// Generic error of the bandroom core.
///
/// Upper layers (CLI, tests) map it to user messages or logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),

  #[error("scan error: {0}")]
  Scan(String),

  #[error("decode error: {0}")]
  Decode(String),

  #[error("invalid studio: {0}")]
  Studio(#[from] StudioError),

  #[error("not found: {0}")]
  NotFound(String),
}

/// Failure to read the text rendering of a musician or a band.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
  #[error("empty input")]
  Empty,

  #[error("missing {0} line")]
  MissingLine(&'static str),

  #[error("unexpected line: {0:?}")]
  UnexpectedLine(String),

  #[error("invalid date {value:?}: {source}")]
  Date {
    value: String,
    #[source]
    source: chrono::ParseError,
  },

  #[error("invalid year {0:?}")]
  Year(String),

  #[error("invalid musician {0:?}")]
  Musician(String),

  #[error("{0} date must be an exact date")]
  NotDated(&'static str),

  #[error("{field} date {date} is outside the accepted career range")]
  DateOutOfRange { field: &'static str, date: chrono::NaiveDate },
}
