use std::fmt;
use std::path::PathBuf;

/// How the body of a [`RawRecord`] is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordFormat {
  /// One JSON envelope or an array of them.
  Json,
  /// One musician per line.
  Roster,
  /// The text form of a single band.
  BandSheet,
}

impl RecordFormat {
  /// Maps a file extension (`json`, `txt`, `band`) to a format.
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "json" => Some(RecordFormat::Json),
      "txt" => Some(RecordFormat::Roster),
      "band" => Some(RecordFormat::BandSheet),
      _ => None,
    }
  }

  pub fn extensions() -> &'static [&'static str] {
    &["json", "txt", "band"]
  }
}

impl fmt::Display for RecordFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RecordFormat::Json => write!(f, "json"),
      RecordFormat::Roster => write!(f, "roster"),
      RecordFormat::BandSheet => write!(f, "band sheet"),
    }
  }
}

/// A record the source has found but not read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
  /// Human readable origin, usually a file path.
  pub origin: String,
  /// Where the adapter reads the body from.
  pub location: PathBuf,
  pub format: RecordFormat,
}

/// Undecoded record content plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
  /// Human readable origin, usually a file path.
  pub origin: String,
  pub format: RecordFormat,
  pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("io error: {0}")]
  Io(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Port that hands raw catalog records to the core.
///
/// The adapter decides where they live (a data directory, fixtures, ...).
/// Listing fails for the whole source; reading fails for one record only.
pub trait RecordSource {
  fn list_records(&self) -> Result<Vec<RecordEntry>, SourceError>;

  fn read_record(&self, entry: &RecordEntry) -> Result<RawRecord, SourceError>;
}
