use std::path::PathBuf;

use bandroom_core::ports::RecordFormat;
use bandroom_fs::{FsError, ScanOptions, scan_files};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ScannerConfig;

#[derive(Debug, Error)]
pub enum ScannerError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("walker error: {0}")]
  Walker(String),

  #[error("config error: {0}")]
  Config(#[from] bandroom_config::ConfigError),
}

impl From<FsError> for ScannerError {
  fn from(e: FsError) -> Self {
    match e {
      FsError::Io(e) => ScannerError::Io(e),
      FsError::Walker(msg) => ScannerError::Walker(msg),
    }
  }
}

/// A record file found under one of the configured roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
  pub path: PathBuf,
  pub format: RecordFormat,
  pub size: u64,
  pub modified: u64,
}

/// Collects record files (`.json`, `.txt`, `.band`) from every root in
/// `cfg`. Roots that do not exist yet are skipped.
pub fn scan_record_files(cfg: &ScannerConfig) -> Result<Vec<RecordFile>, ScannerError> {
  let opts = ScanOptions {
    extensions: RecordFormat::extensions().iter().map(|e| e.to_string()).collect(),
    ignore_hidden: cfg.ignore_hidden,
    max_depth: cfg.max_depth,
  };

  let mut found = Vec::new();

  for root in &cfg.roots {
    if !root.exists() {
      warn!(root = %root.display(), "record root does not exist, skipping");
      continue;
    }

    for file in scan_files(root, &opts)? {
      let Some(format) = file.extension().as_deref().and_then(RecordFormat::from_extension) else {
        continue;
      };
      found.push(RecordFile { path: file.path, format, size: file.size, modified: file.modified });
    }
  }

  debug!(roots = cfg.roots.len(), files = found.len(), "record scan finished");
  Ok(found)
}
