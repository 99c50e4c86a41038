//! Roster files: plain text, one musician per line.

use std::fs;
use std::path::Path;

use bandroom_core::domain::Musician;
use bandroom_core::errors::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("line {line}: {source}")]
  Parse {
    line: usize,
    #[source]
    source: ParseError,
  },
}

pub fn write_roster(path: &Path, musicians: &[Musician]) -> Result<(), RosterError> {
  let mut contents = String::new();
  for m in musicians {
    contents.push_str(&m.to_string());
    contents.push('\n');
  }
  bandroom_fs::atomic_write_str(path, &contents)?;
  Ok(())
}

/// Reads a roster back; blank lines are skipped.
pub fn read_roster(path: &Path) -> Result<Vec<Musician>, RosterError> {
  let contents = fs::read_to_string(path)?;

  contents
    .lines()
    .enumerate()
    .filter(|(_, l)| !l.trim().is_empty())
    .map(|(idx, l)| l.parse::<Musician>().map_err(|source| RosterError::Parse { line: idx + 1, source }))
    .collect()
}
