use std::fs;

use bandroom_core::ports::record_source::{RawRecord, RecordEntry, RecordSource, SourceError};
use tracing::debug;

use crate::config::ScannerConfig;
use crate::record_scanner::{ScannerError, scan_record_files};

/// `RecordSource` backed by the record files of one or more directories.
#[derive(Debug, Clone)]
pub struct DataDirSource {
  config: ScannerConfig,
}

impl DataDirSource {
  pub fn new(config: ScannerConfig) -> Self {
    Self { config }
  }

  /// Uses the `[scanner]` section of the global config.
  pub fn from_config() -> Result<Self, ScannerError> {
    Ok(Self::new(ScannerConfig::load()?))
  }
}

impl RecordSource for DataDirSource {
  fn list_records(&self) -> Result<Vec<RecordEntry>, SourceError> {
    let files = scan_record_files(&self.config).map_err(map_scanner_error)?;

    Ok(
      files
        .into_iter()
        .map(|file| RecordEntry { origin: file.path.display().to_string(), location: file.path, format: file.format })
        .collect(),
    )
  }

  fn read_record(&self, entry: &RecordEntry) -> Result<RawRecord, SourceError> {
    let body = fs::read_to_string(&entry.location).map_err(|e| SourceError::Io(format!("{}: {e}", entry.origin)))?;
    debug!(path = %entry.origin, format = %entry.format, "record loaded");
    Ok(RawRecord { origin: entry.origin.clone(), format: entry.format, body })
  }
}

fn map_scanner_error(err: ScannerError) -> SourceError {
  match err {
    ScannerError::Io(e) => SourceError::Io(e.to_string()),
    ScannerError::Walker(e) => SourceError::Internal(e),
    ScannerError::Config(e) => SourceError::Internal(e.to_string()),
  }
}
